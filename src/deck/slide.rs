/// Slide types and implementation for generated decks.
use crate::common::{RGBColor, Result};
use std::fmt::Write as FmtWrite;

use super::shape::{Frame, Paragraph, Shape, TextFormat};

/// A slide in a [`Deck`](super::Deck).
///
/// Shapes are drawn in insertion order; shape IDs start at 2 because ID 1
/// belongs to the slide's root group shape.
#[derive(Debug, Clone)]
pub struct DeckSlide {
    /// Slide ID in `presentation.xml` (256 and up)
    pub(crate) slide_id: u32,
    /// Solid background fill
    pub(crate) background: Option<RGBColor>,
    /// Shapes on the slide
    pub(crate) shapes: Vec<Shape>,
}

impl DeckSlide {
    pub(crate) fn new(slide_id: u32) -> Self {
        Self {
            slide_id,
            background: None,
            shapes: Vec::new(),
        }
    }

    /// Get the slide ID.
    pub fn slide_id(&self) -> u32 {
        self.slide_id
    }

    /// Fill the slide background with a solid color.
    pub fn set_background(&mut self, color: RGBColor) {
        self.background = Some(color);
    }

    pub fn background(&self) -> Option<RGBColor> {
        self.background
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    fn next_shape_id(&self) -> u32 {
        self.shapes.len() as u32 + 2
    }

    /// Add a single-paragraph text box.
    pub fn add_text(&mut self, text: &str, frame: Frame, format: TextFormat) {
        self.add_text_runs(vec![Paragraph::plain(text)], frame, format);
    }

    /// Add a text box with one entry per paragraph.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use humu_slides::deck::{Deck, Frame, Paragraph, TextFormat};
    ///
    /// let mut deck = Deck::new();
    /// let slide = deck.add_slide();
    /// slide.add_text_runs(
    ///     vec![Paragraph::bulleted("Scope"), Paragraph::bulleted("Budget")],
    ///     Frame::new(0.75, 1.8, 8.5, 4.5),
    ///     TextFormat::new().with_size(18.0),
    /// );
    /// assert_eq!(slide.shapes().len(), 1);
    /// ```
    pub fn add_text_runs(&mut self, paragraphs: Vec<Paragraph>, frame: Frame, format: TextFormat) {
        let id = self.next_shape_id();
        self.shapes
            .push(Shape::new_text_box(id, frame, paragraphs, format));
    }

    /// Add a rectangle with optional fill and outline colors.
    pub fn add_rect(&mut self, frame: Frame, fill: Option<RGBColor>, line: Option<RGBColor>) {
        let id = self.next_shape_id();
        self.shapes.push(Shape::new_rectangle(id, frame, fill, line));
    }

    /// Generate the slide part XML.
    pub(crate) fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(4096);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(
            r#"<p:sld xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#,
        );
        xml.push_str(
            r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" "#,
        );
        xml.push_str(r#"xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">"#);

        xml.push_str("<p:cSld>");

        // Background precedes spTree
        if let Some(color) = self.background {
            xml.push_str("<p:bg><p:bgPr>");
            write!(
                xml,
                r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
                color.to_hex()
            )?;
            xml.push_str("<a:effectLst/>");
            xml.push_str("</p:bgPr></p:bg>");
        }

        xml.push_str("<p:spTree>");
        xml.push_str("<p:nvGrpSpPr>");
        xml.push_str(r#"<p:cNvPr id="1" name=""/>"#);
        xml.push_str("<p:cNvGrpSpPr/>");
        xml.push_str("<p:nvPr/>");
        xml.push_str("</p:nvGrpSpPr>");
        xml.push_str("<p:grpSpPr>");
        xml.push_str("<a:xfrm>");
        xml.push_str(r#"<a:off x="0" y="0"/>"#);
        xml.push_str(r#"<a:ext cx="0" cy="0"/>"#);
        xml.push_str(r#"<a:chOff x="0" y="0"/>"#);
        xml.push_str(r#"<a:chExt cx="0" cy="0"/>"#);
        xml.push_str("</a:xfrm>");
        xml.push_str("</p:grpSpPr>");

        for shape in &self.shapes {
            shape.to_xml(&mut xml)?;
        }

        xml.push_str("</p:spTree>");
        xml.push_str("</p:cSld>");
        xml.push_str("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>");
        xml.push_str("</p:sld>");

        Ok(xml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_ids_are_sequential() {
        let mut slide = DeckSlide::new(256);
        slide.add_text("Title", Frame::new(0.5, 0.5, 9.0, 1.0), TextFormat::new());
        slide.add_rect(Frame::new(0.5, 1.4, 2.5, 0.12), None, None);
        slide.add_text("Footer", Frame::new(0.5, 6.7, 9.0, 0.4), TextFormat::new());

        let ids: Vec<u32> = slide.shapes().iter().map(|s| s.id()).collect();
        assert_eq!(ids, vec![2, 3, 4]);
    }

    #[test]
    fn test_background_precedes_shape_tree() {
        let mut slide = DeckSlide::new(256);
        slide.set_background(RGBColor::new(0x0B, 0x12, 0x20));
        let xml = slide.to_xml().unwrap();

        let bg = xml.find("<p:bg>").unwrap();
        let tree = xml.find("<p:spTree>").unwrap();
        assert!(bg < tree);
        assert!(xml.contains(r#"<a:srgbClr val="0B1220"/>"#));
        assert!(xml.ends_with("</p:sld>"));
    }

    #[test]
    fn test_no_background_by_default() {
        let slide = DeckSlide::new(300);
        let xml = slide.to_xml().unwrap();
        assert!(!xml.contains("<p:bg>"));
        assert_eq!(slide.slide_id(), 300);
    }
}
