//! Named visual themes.
//!
//! Themes are immutable. A session stores only the theme key; lookups of an
//! unknown key resolve to [`DEFAULT_THEME`].

use crate::common::RGBColor;
use phf::phf_map;

/// Key used whenever a requested theme is not recognized.
pub const DEFAULT_THEME: &str = "modernBlue";

/// Colors applied to every slide of an exported deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: RGBColor,
    pub title_color: RGBColor,
    pub text_color: RGBColor,
    pub accent: RGBColor,
}

static THEMES: phf::Map<&'static str, Theme> = phf_map! {
    "modernBlue" => Theme {
        background: RGBColor::new(0xFF, 0xFF, 0xFF),
        title_color: RGBColor::new(0x1E, 0x3A, 0x8A),
        text_color: RGBColor::new(0x0F, 0x17, 0x2A),
        accent: RGBColor::new(0x3B, 0x82, 0xF6),
    },
    "minimalDark" => Theme {
        background: RGBColor::new(0x0B, 0x12, 0x20),
        title_color: RGBColor::new(0xFF, 0xFF, 0xFF),
        text_color: RGBColor::new(0xE5, 0xE7, 0xEB),
        accent: RGBColor::new(0x60, 0xA5, 0xFA),
    },
    "mint" => Theme {
        background: RGBColor::new(0xF0, 0xFD, 0xF4),
        title_color: RGBColor::new(0x06, 0x4E, 0x3B),
        text_color: RGBColor::new(0x06, 0x5F, 0x46),
        accent: RGBColor::new(0x10, 0xB9, 0x81),
    },
};

/// Theme keys in display order.
const THEME_KEYS: [&str; 3] = ["modernBlue", "minimalDark", "mint"];

/// Look up a theme by exact key.
pub fn lookup(key: &str) -> Option<&'static Theme> {
    THEMES.get(key)
}

/// Resolve a key, falling back to the default theme.
pub fn resolve(key: &str) -> &'static Theme {
    THEMES
        .get(key)
        .or_else(|| THEMES.get(DEFAULT_THEME))
        .unwrap_or(&FALLBACK)
}

/// Resolve a key to the key that will actually be used.
pub fn resolve_key(key: &str) -> &'static str {
    THEME_KEYS
        .iter()
        .copied()
        .find(|k| *k == key)
        .unwrap_or(DEFAULT_THEME)
}

/// All themes with their keys, in display order.
pub fn all() -> impl Iterator<Item = (&'static str, &'static Theme)> {
    THEME_KEYS
        .iter()
        .filter_map(|key| THEMES.get_entry(*key).map(|(k, t)| (*k, t)))
}

// Same values as "modernBlue"; only reachable if the table lost its default.
static FALLBACK: Theme = Theme {
    background: RGBColor::new(0xFF, 0xFF, 0xFF),
    title_color: RGBColor::new(0x1E, 0x3A, 0x8A),
    text_color: RGBColor::new(0x0F, 0x17, 0x2A),
    accent: RGBColor::new(0x3B, 0x82, 0xF6),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_keys() {
        let dark = resolve("minimalDark");
        assert_eq!(dark.background.to_hex(), "0B1220");
        assert_eq!(dark.accent.to_hex(), "60A5FA");
        assert_eq!(resolve("mint").title_color.to_hex(), "064E3B");
    }

    #[test]
    fn test_unknown_key_falls_back() {
        assert_eq!(resolve("neon"), resolve(DEFAULT_THEME));
        assert_eq!(resolve_key("neon"), "modernBlue");
        assert_eq!(resolve_key("mint"), "mint");
        assert!(lookup("neon").is_none());
    }

    #[test]
    fn test_all_lists_every_theme_in_order() {
        let keys: Vec<&str> = all().map(|(k, _)| k).collect();
        assert_eq!(keys, THEME_KEYS);
        assert_eq!(*resolve(DEFAULT_THEME), FALLBACK);
    }
}
