//! OPC package writing for decks.
//!
//! Parts are buffered with their content types and written to a ZIP archive
//! on [`PackageWriter::finish`], with `[Content_Types].xml` as the first entry.

use super::constants::{content_type as ct, namespace};
use crate::common::Result;
use crate::common::xml::escape_xml;
use std::collections::BTreeMap;
use std::io::{Cursor, Write};
use zip::write::{SimpleFileOptions, ZipWriter};

/// A part waiting to be written.
#[derive(Debug, Clone)]
struct PartEntry {
    /// Path within the archive, without a leading slash
    path: String,
    content: Vec<u8>,
}

/// Builder for PresentationML packages.
///
/// # Examples
///
/// ```rust
/// use humu_slides::deck::package::PackageWriter;
///
/// let mut writer = PackageWriter::new();
/// writer.add_part("docProps/app.xml", "application/xml", b"<Properties/>");
/// let bytes = writer.finish().unwrap();
/// assert_eq!(&bytes[..2], b"PK");
/// ```
#[derive(Debug, Default)]
pub struct PackageWriter {
    parts: Vec<PartEntry>,
    content_types: ContentTypes,
}

impl PackageWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a part with its content type.
    ///
    /// `.rels` and plain `.xml` parts map to the package defaults; every other
    /// part gets an `<Override>` entry.
    pub fn add_part(&mut self, path: &str, content_type: &str, content: impl Into<Vec<u8>>) {
        let path = path.trim_start_matches('/');
        self.content_types.add(path, content_type);
        self.parts.push(PartEntry {
            path: path.to_string(),
            content: content.into(),
        });
    }

    /// Add a relationships part.
    pub fn add_rels(&mut self, path: &str, rels: &Relationships) {
        self.add_part(path, ct::OPC_RELATIONSHIPS, rels.to_xml());
    }

    /// Number of buffered parts, excluding `[Content_Types].xml`.
    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    /// Write all parts to an in-memory ZIP archive.
    pub fn finish(self) -> Result<Vec<u8>> {
        let mut zip_writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

        zip_writer.start_file("[Content_Types].xml", options)?;
        zip_writer.write_all(self.content_types.to_xml().as_bytes())?;

        for part in &self.parts {
            zip_writer.start_file(part.path.as_str(), options)?;
            zip_writer.write_all(&part.content)?;
        }

        let cursor = zip_writer.finish()?;
        Ok(cursor.into_inner())
    }
}

/// `[Content_Types].xml` builder.
#[derive(Debug)]
struct ContentTypes {
    /// Default content types by extension
    defaults: BTreeMap<String, String>,
    /// Override content types by partname
    overrides: BTreeMap<String, String>,
}

impl Default for ContentTypes {
    fn default() -> Self {
        let mut defaults = BTreeMap::new();
        defaults.insert("rels".to_string(), ct::OPC_RELATIONSHIPS.to_string());
        defaults.insert("xml".to_string(), ct::XML.to_string());
        Self {
            defaults,
            overrides: BTreeMap::new(),
        }
    }
}

impl ContentTypes {
    fn add(&mut self, path: &str, content_type: &str) {
        let ext = path.rsplit_once('.').map(|(_, ext)| ext).unwrap_or("");
        if self.defaults.get(ext).is_some_and(|d| d == content_type) {
            return;
        }
        self.overrides
            .insert(format!("/{path}"), content_type.to_string());
    }

    fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(2048);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(r#"<Types xmlns=""#);
        xml.push_str(namespace::OPC_CONTENT_TYPES);
        xml.push_str(r#"">"#);

        for (ext, content_type) in &self.defaults {
            xml.push_str(&format!(
                r#"<Default Extension="{}" ContentType="{}"/>"#,
                escape_xml(ext),
                escape_xml(content_type)
            ));
        }

        for (partname, content_type) in &self.overrides {
            xml.push_str(&format!(
                r#"<Override PartName="{}" ContentType="{}"/>"#,
                escape_xml(partname),
                escape_xml(content_type)
            ));
        }

        xml.push_str("</Types>");
        xml
    }
}

/// Relationships of one source part, numbered `rId1`, `rId2`, ... in
/// insertion order.
#[derive(Debug, Clone, Default)]
pub struct Relationships {
    entries: Vec<(String, String)>,
}

impl Relationships {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a relationship and return its ID.
    pub fn add(&mut self, reltype: &str, target: &str) -> String {
        self.entries.push((reltype.to_string(), target.to_string()));
        format!("rId{}", self.entries.len())
    }

    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(256 + self.entries.len() * 160);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(r#"<Relationships xmlns=""#);
        xml.push_str(namespace::OPC_RELATIONSHIPS);
        xml.push_str(r#"">"#);

        for (index, (reltype, target)) in self.entries.iter().enumerate() {
            xml.push_str(&format!(
                r#"<Relationship Id="rId{}" Type="{}" Target="{}"/>"#,
                index + 1,
                escape_xml(reltype),
                escape_xml(target)
            ));
        }

        xml.push_str("</Relationships>");
        xml
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::constants::relationship_type as rt;
    use std::io::Read;

    #[test]
    fn test_relationship_ids_follow_insertion_order() {
        let mut rels = Relationships::new();
        assert_eq!(rels.add(rt::SLIDE_MASTER, "slideMasters/slideMaster1.xml"), "rId1");
        assert_eq!(rels.add(rt::SLIDE, "slides/slide1.xml"), "rId2");

        let xml = rels.to_xml();
        assert!(xml.contains(r#"<Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide" Target="slides/slide1.xml"/>"#));
        assert_eq!(xml.matches("<Relationship ").count(), 2);
    }

    #[test]
    fn test_content_types_defaults_and_overrides() {
        let mut cti = ContentTypes::default();
        cti.add("_rels/.rels", ct::OPC_RELATIONSHIPS);
        cti.add("ppt/slides/slide1.xml", ct::PML_SLIDE);

        let xml = cti.to_xml();
        assert!(xml.contains(r#"<Default Extension="rels""#));
        assert!(xml.contains(r#"<Override PartName="/ppt/slides/slide1.xml""#));
        assert!(!xml.contains(r#"PartName="/_rels/.rels""#));
    }

    #[test]
    fn test_content_types_written_first() {
        let mut writer = PackageWriter::new();
        writer.add_part("ppt/presentation.xml", ct::PML_PRESENTATION_MAIN, "<p/>");
        let bytes = writer.finish().unwrap();

        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(archive.len(), 2);
        assert_eq!(archive.by_index(0).unwrap().name(), "[Content_Types].xml");

        let mut content = String::new();
        archive
            .by_name("ppt/presentation.xml")
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        assert_eq!(content, "<p/>");
    }
}
