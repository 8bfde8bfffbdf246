//! Format types for deck text.

use crate::common::RGBColor;

/// Horizontal paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

impl TextAlign {
    /// DrawingML `algn` attribute value.
    pub fn as_ooxml(&self) -> &'static str {
        match self {
            Self::Left => "l",
            Self::Center => "ctr",
            Self::Right => "r",
            Self::Justify => "just",
        }
    }
}

/// Text formatting properties for a text box.
///
/// Applied uniformly to every paragraph of the box.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextFormat {
    /// Font family
    pub font: Option<String>,
    /// Font size in points
    pub size: Option<f64>,
    /// Bold text
    pub bold: Option<bool>,
    /// Text color
    pub color: Option<RGBColor>,
    /// Paragraph alignment
    pub align: Option<TextAlign>,
}

impl TextFormat {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_font(mut self, font: &str) -> Self {
        self.font = Some(font.to_string());
        self
    }

    #[inline]
    pub fn with_size(mut self, size: f64) -> Self {
        self.size = Some(size);
        self
    }

    #[inline]
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = Some(bold);
        self
    }

    #[inline]
    pub fn with_color(mut self, color: RGBColor) -> Self {
        self.color = Some(color);
        self
    }

    #[inline]
    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.align = Some(align);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_sets_fields() {
        let f = TextFormat::new()
            .with_font("Arial")
            .with_size(18.0)
            .with_bold(true)
            .with_color(RGBColor::new(0, 0, 0))
            .with_align(TextAlign::Right);
        assert_eq!(f.font.as_deref(), Some("Arial"));
        assert_eq!(f.size, Some(18.0));
        assert_eq!(f.bold, Some(true));
        assert_eq!(f.align.map(|a| a.as_ooxml()), Some("r"));
    }
}
