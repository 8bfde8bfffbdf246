//! Slide outlines.
//!
//! An outline is an ordered list of [`SlideRecord`]s. Outlines come from the
//! local [`generator`], from the [`remote`] endpoint, or from a JSON file.

pub mod generator;
pub mod remote;

pub use generator::generate;
pub use remote::{RemoteOutline, RemoteOutlineAdapter, UnavailableReason};

use crate::common::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Slide count used when the request names none.
pub const DEFAULT_SLIDE_COUNT: usize = 6;
/// Smallest outline a generate request produces.
pub const MIN_SLIDE_COUNT: usize = 3;
/// Largest outline a generate request produces.
pub const MAX_SLIDE_COUNT: usize = 20;

/// One slide: a title and its bullet points.
///
/// Serialized as `{"title": ..., "bullets": [...]}`, the same shape the
/// remote endpoint returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideRecord {
    pub title: String,
    pub bullets: Vec<String>,
}

impl SlideRecord {
    pub fn new(title: impl Into<String>, bullets: Vec<String>) -> Self {
        Self {
            title: title.into(),
            bullets,
        }
    }

    /// Build a record from raw editor input.
    ///
    /// The title is trimmed. `raw_bullets` is split on line breaks; every line
    /// is trimmed and blank lines are dropped, keeping the original order.
    pub fn from_editor(title: &str, raw_bullets: &str) -> Self {
        Self {
            title: title.trim().to_string(),
            bullets: split_bullets(raw_bullets),
        }
    }

    /// Trim the title and bullets and drop blank bullets.
    pub fn normalized(self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            bullets: self
                .bullets
                .iter()
                .map(|b| b.trim())
                .filter(|b| !b.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }
}

/// Split editor text into trimmed, non-blank lines.
pub fn split_bullets(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Trim a topic, rejecting one that is empty afterwards.
pub fn validate_topic(topic: &str) -> Result<&str> {
    let topic = topic.trim();
    if topic.is_empty() {
        return Err(Error::EmptyTopic);
    }
    Ok(topic)
}

/// Apply the default and clamp a requested slide count to
/// [`MIN_SLIDE_COUNT`]..=[`MAX_SLIDE_COUNT`].
pub fn clamp_slide_count(requested: Option<i64>) -> usize {
    let requested = requested.unwrap_or(DEFAULT_SLIDE_COUNT as i64);
    requested.clamp(MIN_SLIDE_COUNT as i64, MAX_SLIDE_COUNT as i64) as usize
}

/// Read an outline from a JSON file.
///
/// Records are normalized on the way in.
pub fn load_outline<P: AsRef<Path>>(path: P) -> Result<Vec<SlideRecord>> {
    let content = std::fs::read_to_string(path)?;
    let records: Vec<SlideRecord> = serde_json::from_str(&content)?;
    Ok(records.into_iter().map(SlideRecord::normalized).collect())
}

/// Write an outline as pretty-printed JSON.
pub fn save_outline<P: AsRef<Path>>(path: P, slides: &[SlideRecord]) -> Result<()> {
    let json = serde_json::to_string_pretty(slides)?;
    std::fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_topic() {
        assert_eq!(validate_topic("  Rust  ").unwrap(), "Rust");
        assert!(matches!(validate_topic("   \t"), Err(Error::EmptyTopic)));
        assert!(matches!(validate_topic(""), Err(Error::EmptyTopic)));
    }

    #[test]
    fn test_clamp_slide_count() {
        assert_eq!(clamp_slide_count(None), 6);
        assert_eq!(clamp_slide_count(Some(1)), 3);
        assert_eq!(clamp_slide_count(Some(-4)), 3);
        assert_eq!(clamp_slide_count(Some(12)), 12);
        assert_eq!(clamp_slide_count(Some(99)), 20);
    }

    #[test]
    fn test_from_editor_filters_blank_lines() {
        let record = SlideRecord::from_editor("  Intro ", "A\n\n  B  \n   \nC\r\n");
        assert_eq!(record.title, "Intro");
        assert_eq!(record.bullets, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_normalized() {
        let record = SlideRecord::new(" T ", vec![" x ".into(), "  ".into(), "y".into()]);
        let record = record.normalized();
        assert_eq!(record.title, "T");
        assert_eq!(record.bullets, vec!["x", "y"]);
    }

    #[test]
    fn test_outline_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("outline.json");
        let slides = generate("Rust", 4);

        save_outline(&path, &slides).unwrap();
        assert_eq!(load_outline(&path).unwrap(), slides);
    }

    #[test]
    fn test_load_outline_rejects_wrong_shape() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("outline.json");
        std::fs::write(&path, r#"{"title": "not a list"}"#).unwrap();

        assert!(matches!(load_outline(&path), Err(Error::Json(_))));
    }
}
