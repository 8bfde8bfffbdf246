use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;

// Static initialization: automaton is built only once, thread-safe
static XML_ESCAPER: Lazy<Option<AhoCorasick>> =
    Lazy::new(|| AhoCorasick::builder().build(["&", "<", ">", "\"", "'"]).ok());

const ESCAPED: [&str; 5] = ["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"];

/// Escape XML special characters.
///
/// # Examples
///
/// ```
/// use humu_slides::common::xml::escape_xml;
/// assert_eq!(escape_xml("Benefits & Challenges"), "Benefits &amp; Challenges");
/// assert_eq!(escape_xml("<b>\"hi\"</b>"), "&lt;b&gt;&quot;hi&quot;&lt;/b&gt;");
/// ```
#[inline]
pub fn escape_xml(s: &str) -> String {
    match XML_ESCAPER.as_ref() {
        Some(escaper) => escaper.replace_all(s, &ESCAPED),
        None => s
            .replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;"),
    }
}

/// Escape text for an XML element and drop characters XML 1.0 cannot carry.
///
/// Slide text comes straight from user input, so stray control characters
/// (other than tab, CR and LF) are removed rather than producing an
/// unreadable part.
pub fn escape_text(s: &str) -> String {
    if s.chars().any(is_forbidden_char) {
        let cleaned: String = s.chars().filter(|&c| !is_forbidden_char(c)).collect();
        escape_xml(&cleaned)
    } else {
        escape_xml(s)
    }
}

#[inline]
fn is_forbidden_char(c: char) -> bool {
    matches!(c, '\u{0}'..='\u{8}' | '\u{B}' | '\u{C}' | '\u{E}'..='\u{1F}' | '\u{FFFE}' | '\u{FFFF}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_all_entities() {
        assert_eq!(escape_xml(r#"a&b<c>d"e'f"#), "a&amp;b&lt;c&gt;d&quot;e&apos;f");
    }

    #[test]
    fn test_escape_is_not_reentrant() {
        assert_eq!(escape_xml("&amp;"), "&amp;amp;");
    }

    #[test]
    fn test_escape_text_strips_control_chars() {
        assert_eq!(escape_text("Key\u{1}Ideas\tok"), "KeyIdeas\tok");
        assert_eq!(escape_text("What’s next?"), "What’s next?");
    }
}
