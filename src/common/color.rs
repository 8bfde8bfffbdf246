use crate::common::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// RGB color representation.
///
/// Written to DrawingML as `<a:srgbClr val="RRGGBB"/>`.
///
/// # Examples
///
/// ```rust
/// use humu_slides::common::RGBColor;
///
/// let navy = RGBColor::new(0x1E, 0x3A, 0x8A);
/// assert_eq!(navy.to_hex(), "1E3A8A");
/// assert_eq!(RGBColor::from_hex("#1e3a8a"), Some(navy));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RGBColor {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
}

impl RGBColor {
    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create an RGB color from a hex string (`"FF0000"` or `"#FF0000"`).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Self::new(r, g, b))
    }

    /// Convert to an uppercase hex string without `#` prefix.
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for RGBColor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s).ok_or_else(|| Error::InvalidColor(s.to_string()))
    }
}

impl fmt::Display for RGBColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_round_trip() {
        let c = RGBColor::from_hex("0B1220").unwrap();
        assert_eq!(c, RGBColor::new(0x0B, 0x12, 0x20));
        assert_eq!(c.to_hex(), "0B1220");
        assert_eq!(c.to_string(), "#0B1220");
    }

    #[test]
    fn test_rejects_malformed_hex() {
        assert_eq!(RGBColor::from_hex("FFF"), None);
        assert_eq!(RGBColor::from_hex("GG0000"), None);
        assert_eq!(RGBColor::from_hex("ééé"), None);
        assert!(matches!("12345".parse::<RGBColor>(), Err(Error::InvalidColor(_))));
    }

    #[test]
    fn test_rejects_signs_and_repeated_hash() {
        assert_eq!(RGBColor::from_hex("+1+2+3"), None);
        assert_eq!(RGBColor::from_hex("##0B1220"), None);
        assert_eq!(RGBColor::from_hex("#0b1220"), Some(RGBColor::new(0x0B, 0x12, 0x20)));
        assert!(matches!("-1-2-3".parse::<RGBColor>(), Err(Error::InvalidColor(_))));
    }
}
