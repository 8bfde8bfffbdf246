//! Deck document properties.
//!
//! Written to `docProps/core.xml` (title, author, timestamps) and
//! `docProps/app.xml` (company, slide count).

use crate::common::xml::escape_text;
use chrono::{DateTime, SecondsFormat, Utc};

/// Package-level metadata for a deck.
#[derive(Debug, Clone)]
pub struct DeckMetadata {
    /// Deck title
    pub title: Option<String>,
    /// Author, written as both creator and last-modified-by
    pub author: Option<String>,
    /// Company, written to the extended properties
    pub company: Option<String>,
    /// Creation time
    pub created: DateTime<Utc>,
    /// Last modification time
    pub modified: DateTime<Utc>,
}

impl Default for DeckMetadata {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            title: None,
            author: None,
            company: None,
            created: now,
            modified: now,
        }
    }
}

impl DeckMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate core.xml content.
    pub(crate) fn core_xml(&self) -> String {
        let mut xml = String::with_capacity(1024);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#);

        if let Some(ref title) = self.title {
            xml.push_str("<dc:title>");
            xml.push_str(&escape_text(title));
            xml.push_str("</dc:title>");
        }

        if let Some(ref author) = self.author {
            let author = escape_text(author);
            xml.push_str("<dc:creator>");
            xml.push_str(&author);
            xml.push_str("</dc:creator>");
            xml.push_str("<cp:lastModifiedBy>");
            xml.push_str(&author);
            xml.push_str("</cp:lastModifiedBy>");
        }

        xml.push_str("<cp:revision>1</cp:revision>");

        xml.push_str("<dcterms:created xsi:type=\"dcterms:W3CDTF\">");
        xml.push_str(&self.created.to_rfc3339_opts(SecondsFormat::Secs, true));
        xml.push_str("</dcterms:created>");

        xml.push_str("<dcterms:modified xsi:type=\"dcterms:W3CDTF\">");
        xml.push_str(&self.modified.to_rfc3339_opts(SecondsFormat::Secs, true));
        xml.push_str("</dcterms:modified>");

        xml.push_str("</cp:coreProperties>");
        xml
    }

    /// Generate app.xml content for a deck of `slide_count` slides.
    pub(crate) fn app_xml(&self, slide_count: usize) -> String {
        let mut xml = String::with_capacity(1024);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(r#"<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">"#);
        xml.push_str("<Application>Humu Slides</Application>");
        xml.push_str("<PresentationFormat>On-screen Show (4:3)</PresentationFormat>");
        xml.push_str("<Slides>");
        xml.push_str(&slide_count.to_string());
        xml.push_str("</Slides>");

        if let Some(ref company) = self.company {
            xml.push_str("<Company>");
            xml.push_str(&escape_text(company));
            xml.push_str("</Company>");
        }

        xml.push_str("<AppVersion>16.0000</AppVersion>");
        xml.push_str("</Properties>");
        xml
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_core_xml() {
        let mut meta = DeckMetadata::new();
        meta.title = Some("Cats & Dogs".to_string());
        meta.author = Some("Humu Slides".to_string());
        meta.created = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        meta.modified = meta.created;

        let xml = meta.core_xml();
        assert!(xml.contains("<dc:title>Cats &amp; Dogs</dc:title>"));
        assert!(xml.contains("<dc:creator>Humu Slides</dc:creator>"));
        assert!(xml.contains(">2024-03-01T12:00:00Z</dcterms:created>"));
    }

    #[test]
    fn test_app_xml() {
        let mut meta = DeckMetadata::new();
        meta.company = Some("Humu".to_string());
        let xml = meta.app_xml(6);
        assert!(xml.contains("<Slides>6</Slides>"));
        assert!(xml.contains("<Company>Humu</Company>"));
    }

    #[test]
    fn test_missing_fields_are_omitted() {
        let xml = DeckMetadata::new().core_xml();
        assert!(!xml.contains("<dc:title>"));
        assert!(!xml.contains("<dc:creator>"));
    }
}
