/// Deck assembly and serialization.
use super::constants::{content_type as ct, relationship_type as rt};
use super::metadata::DeckMetadata;
use super::package::{PackageWriter, Relationships};
use super::slide::DeckSlide;
use super::template;
use crate::common::Result;
use crate::common::unit::EMUS_PER_INCH;
use std::fmt::Write as FmtWrite;
use std::path::Path;
use tracing::debug;

/// First slide ID allowed in `<p:sldIdLst>`.
const FIRST_SLIDE_ID: u32 = 256;

/// A presentation being built in memory.
///
/// Every slide uses the single blank layout; content is drawn with absolutely
/// positioned shapes.
///
/// # Examples
///
/// ```rust
/// use humu_slides::common::RGBColor;
/// use humu_slides::deck::{Deck, Frame, TextFormat};
///
/// let mut deck = Deck::new();
/// deck.set_title("Quarterly Review");
/// let slide = deck.add_slide();
/// slide.set_background(RGBColor::new(0xFF, 0xFF, 0xFF));
/// slide.add_text("Agenda", Frame::new(0.5, 0.5, 9.0, 1.0), TextFormat::new().with_size(30.0));
///
/// let bytes = deck.to_bytes().unwrap();
/// assert_eq!(&bytes[..2], b"PK");
/// ```
#[derive(Debug)]
pub struct Deck {
    /// Slides in the deck
    pub(crate) slides: Vec<DeckSlide>,
    /// Slide width in EMUs
    slide_width: i64,
    /// Slide height in EMUs
    slide_height: i64,
    metadata: DeckMetadata,
}

impl Deck {
    /// Create an empty deck at 10" x 7.5".
    pub fn new() -> Self {
        Self {
            slides: Vec::new(),
            slide_width: 10 * EMUS_PER_INCH,
            slide_height: 7 * EMUS_PER_INCH + EMUS_PER_INCH / 2,
            metadata: DeckMetadata::new(),
        }
    }

    pub fn set_title(&mut self, title: &str) {
        self.metadata.title = Some(title.to_string());
    }

    pub fn set_author(&mut self, author: &str) {
        self.metadata.author = Some(author.to_string());
    }

    pub fn set_company(&mut self, company: &str) {
        self.metadata.company = Some(company.to_string());
    }

    pub fn metadata(&self) -> &DeckMetadata {
        &self.metadata
    }

    /// Append a new blank slide and return it for drawing.
    pub fn add_slide(&mut self) -> &mut DeckSlide {
        let slide_id = FIRST_SLIDE_ID + self.slides.len() as u32;
        self.slides.push(DeckSlide::new(slide_id));
        let index = self.slides.len() - 1;
        &mut self.slides[index]
    }

    pub fn slides(&self) -> &[DeckSlide] {
        &self.slides
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Get the slide width in EMUs.
    pub fn slide_width(&self) -> i64 {
        self.slide_width
    }

    /// Get the slide height in EMUs.
    pub fn slide_height(&self) -> i64 {
        self.slide_height
    }


    /// Generate presentation.xml given the relationship ID of the master and
    /// of each slide.
    fn presentation_xml(&self, master_rel_id: &str, slide_rel_ids: &[String]) -> Result<String> {
        let mut xml = String::with_capacity(2048);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(r#"<p:presentation xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" saveSubsetFonts="1">"#);

        xml.push_str("<p:sldMasterIdLst>");
        write!(
            xml,
            r#"<p:sldMasterId id="2147483648" r:id="{master_rel_id}"/>"#
        )?;
        xml.push_str("</p:sldMasterIdLst>");

        if !self.slides.is_empty() {
            xml.push_str("<p:sldIdLst>");
            for (slide, rel_id) in self.slides.iter().zip(slide_rel_ids) {
                write!(
                    xml,
                    r#"<p:sldId id="{}" r:id="{}"/>"#,
                    slide.slide_id(),
                    rel_id
                )?;
            }
            xml.push_str("</p:sldIdLst>");
        }

        write!(
            xml,
            r#"<p:sldSz cx="{}" cy="{}"/>"#,
            self.slide_width, self.slide_height
        )?;
        xml.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/>"#);
        xml.push_str("<p:defaultTextStyle><a:defPPr><a:defRPr lang=\"en-US\"/></a:defPPr></p:defaultTextStyle>");
        xml.push_str("</p:presentation>");

        Ok(xml)
    }

    /// Serialize the deck to `.pptx` bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut writer = PackageWriter::new();

        let mut pkg_rels = Relationships::new();
        pkg_rels.add(rt::OFFICE_DOCUMENT, "ppt/presentation.xml");
        pkg_rels.add(rt::CORE_PROPERTIES, "docProps/core.xml");
        pkg_rels.add(rt::EXTENDED_PROPERTIES, "docProps/app.xml");
        writer.add_rels("_rels/.rels", &pkg_rels);

        writer.add_part("docProps/core.xml", ct::OPC_CORE_PROPERTIES, self.metadata.core_xml());
        writer.add_part(
            "docProps/app.xml",
            ct::OFC_EXTENDED_PROPERTIES,
            self.metadata.app_xml(self.slides.len()),
        );

        let mut pres_rels = Relationships::new();
        let master_rel_id = pres_rels.add(rt::SLIDE_MASTER, "slideMasters/slideMaster1.xml");
        let slide_rel_ids: Vec<String> = (1..=self.slides.len())
            .map(|n| pres_rels.add(rt::SLIDE, &format!("slides/slide{n}.xml")))
            .collect();
        pres_rels.add(rt::PRES_PROPS, "presProps.xml");
        pres_rels.add(rt::VIEW_PROPS, "viewProps.xml");
        pres_rels.add(rt::THEME, "theme/theme1.xml");
        pres_rels.add(rt::TABLE_STYLES, "tableStyles.xml");

        writer.add_part(
            "ppt/presentation.xml",
            ct::PML_PRESENTATION_MAIN,
            self.presentation_xml(&master_rel_id, &slide_rel_ids)?,
        );
        writer.add_rels("ppt/_rels/presentation.xml.rels", &pres_rels);

        let mut master_rels = Relationships::new();
        master_rels.add(rt::SLIDE_LAYOUT, "../slideLayouts/slideLayout1.xml");
        master_rels.add(rt::THEME, "../theme/theme1.xml");
        writer.add_part(
            "ppt/slideMasters/slideMaster1.xml",
            ct::PML_SLIDE_MASTER,
            template::slide_master_xml(),
        );
        writer.add_rels("ppt/slideMasters/_rels/slideMaster1.xml.rels", &master_rels);

        let mut layout_rels = Relationships::new();
        layout_rels.add(rt::SLIDE_MASTER, "../slideMasters/slideMaster1.xml");
        writer.add_part(
            "ppt/slideLayouts/slideLayout1.xml",
            ct::PML_SLIDE_LAYOUT,
            template::blank_layout_xml(),
        );
        writer.add_rels("ppt/slideLayouts/_rels/slideLayout1.xml.rels", &layout_rels);

        for (index, slide) in self.slides.iter().enumerate() {
            let n = index + 1;
            let mut slide_rels = Relationships::new();
            slide_rels.add(rt::SLIDE_LAYOUT, "../slideLayouts/slideLayout1.xml");

            writer.add_part(&format!("ppt/slides/slide{n}.xml"), ct::PML_SLIDE, slide.to_xml()?);
            writer.add_rels(&format!("ppt/slides/_rels/slide{n}.xml.rels"), &slide_rels);
        }

        writer.add_part("ppt/theme/theme1.xml", ct::OFC_THEME, template::theme_xml());
        writer.add_part("ppt/presProps.xml", ct::PML_PRES_PROPS, template::pres_props_xml());
        writer.add_part("ppt/viewProps.xml", ct::PML_VIEW_PROPS, template::view_props_xml());
        writer.add_part(
            "ppt/tableStyles.xml",
            ct::PML_TABLE_STYLES,
            template::table_styles_xml(),
        );

        debug!(
            slides = self.slides.len(),
            parts = writer.part_count(),
            "serializing deck"
        );
        writer.finish()
    }

    /// Serialize the deck and write it to `path`.
    pub fn write_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let bytes = self.to_bytes()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::{Frame, TextFormat};
    use std::io::{Cursor, Read};

    fn read_entry(bytes: &[u8], name: &str) -> String {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut content = String::new();
        archive
            .by_name(name)
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        content
    }

    #[test]
    fn test_create_deck() {
        let deck = Deck::new();
        assert_eq!(deck.slide_count(), 0);
        assert_eq!(deck.slide_width(), 9_144_000);
        assert_eq!(deck.slide_height(), 6_858_000);
    }

    #[test]
    fn test_slide_ids_start_at_256() {
        let mut deck = Deck::new();
        deck.add_slide();
        deck.add_slide();
        let ids: Vec<u32> = deck.slides().iter().map(|s| s.slide_id()).collect();
        assert_eq!(ids, vec![256, 257]);
    }

    #[test]
    fn test_package_layout() {
        let mut deck = Deck::new();
        deck.set_title("Cats");
        deck.add_slide()
            .add_text("One", Frame::new(0.5, 0.5, 9.0, 1.0), TextFormat::new());
        deck.add_slide()
            .add_text("Two", Frame::new(0.5, 0.5, 9.0, 1.0), TextFormat::new());

        let bytes = deck.to_bytes().unwrap();
        let archive = zip::ZipArchive::new(Cursor::new(bytes.as_slice())).unwrap();
        let names: Vec<&str> = archive.file_names().collect();
        for expected in [
            "[Content_Types].xml",
            "_rels/.rels",
            "docProps/core.xml",
            "docProps/app.xml",
            "ppt/presentation.xml",
            "ppt/_rels/presentation.xml.rels",
            "ppt/slideMasters/slideMaster1.xml",
            "ppt/slideLayouts/slideLayout1.xml",
            "ppt/slides/slide1.xml",
            "ppt/slides/slide2.xml",
            "ppt/slides/_rels/slide2.xml.rels",
            "ppt/theme/theme1.xml",
        ] {
            assert!(names.contains(&expected), "missing {expected}");
        }

        let pres = read_entry(&bytes, "ppt/presentation.xml");
        assert!(pres.contains(r#"<p:sldMasterId id="2147483648" r:id="rId1"/>"#));
        assert!(pres.contains(r#"<p:sldId id="256" r:id="rId2"/>"#));
        assert!(pres.contains(r#"<p:sldId id="257" r:id="rId3"/>"#));
        assert!(pres.contains(r#"<p:sldSz cx="9144000" cy="6858000"/>"#));

        let rels = read_entry(&bytes, "ppt/_rels/presentation.xml.rels");
        assert!(rels.contains(r#"Id="rId3" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide" Target="slides/slide2.xml""#));

        let types = read_entry(&bytes, "[Content_Types].xml");
        assert!(types.contains(r#"<Override PartName="/ppt/slides/slide2.xml""#));

        let core = read_entry(&bytes, "docProps/core.xml");
        assert!(core.contains("<dc:title>Cats</dc:title>"));
    }

    #[test]
    fn test_write_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.pptx");

        let mut deck = Deck::new();
        deck.add_slide();
        deck.write_file(&path).unwrap();

        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }
}
