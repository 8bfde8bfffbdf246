//! Presentation export.
//!
//! Maps an [`EditingSession`] and its theme onto a [`Deck`]: one slide per
//! record with a title, an accent bar, the bullet list and a footer.

use crate::common::{Error, Result};
use crate::deck::{Deck, Frame, Paragraph, TextAlign, TextFormat};
use crate::outline::SlideRecord;
use crate::session::EditingSession;
use crate::theme::Theme;
use std::path::{Path, PathBuf};
use tracing::info;

/// Author, footer text and fallback deck title.
pub const PRODUCT_NAME: &str = "Humu Slides";
/// Company written to the deck metadata.
pub const COMPANY: &str = "Humu";
/// Font face for every text box.
pub const FONT_FACE: &str = "Arial";

const TITLE_FRAME: Frame = Frame::new(0.5, 0.5, 9.0, 1.0);
const ACCENT_FRAME: Frame = Frame::new(0.5, 1.4, 2.5, 0.12);
const BULLETS_FRAME: Frame = Frame::new(0.75, 1.8, 8.5, 4.5);
const FOOTER_FRAME: Frame = Frame::new(0.5, 6.7, 9.0, 0.4);

const TITLE_SIZE: f64 = 30.0;
const BULLET_SIZE: f64 = 18.0;
const FOOTER_SIZE: f64 = 10.0;

/// Build the deck for a session.
///
/// Refuses an empty session with [`Error::EmptySession`].
pub fn build_deck(session: &EditingSession) -> Result<Deck> {
    if !session.download_enabled() {
        return Err(Error::EmptySession);
    }

    let theme = session.theme();
    let slides = session.slides();

    let mut deck = Deck::new();
    deck.set_author(PRODUCT_NAME);
    deck.set_company(COMPANY);
    deck.set_title(deck_title(slides));

    for (index, record) in slides.iter().enumerate() {
        add_record_slide(&mut deck, index, record, theme);
    }

    Ok(deck)
}

fn add_record_slide(deck: &mut Deck, index: usize, record: &SlideRecord, theme: &Theme) {
    let slide = deck.add_slide();
    slide.set_background(theme.background);

    let title = if record.title.is_empty() {
        format!("Slide {}", index + 1)
    } else {
        record.title.clone()
    };
    slide.add_text(
        &title,
        TITLE_FRAME,
        TextFormat::new()
            .with_font(FONT_FACE)
            .with_size(TITLE_SIZE)
            .with_bold(true)
            .with_color(theme.title_color),
    );

    slide.add_rect(ACCENT_FRAME, Some(theme.accent), Some(theme.accent));

    slide.add_text_runs(
        record
            .bullets
            .iter()
            .map(|b| Paragraph::bulleted(b.as_str()))
            .collect(),
        BULLETS_FRAME,
        TextFormat::new()
            .with_font(FONT_FACE)
            .with_size(BULLET_SIZE)
            .with_color(theme.text_color),
    );

    slide.add_text(
        PRODUCT_NAME,
        FOOTER_FRAME,
        TextFormat::new()
            .with_font(FONT_FACE)
            .with_size(FOOTER_SIZE)
            .with_color(theme.text_color)
            .with_align(TextAlign::Right),
    );
}

fn deck_title(slides: &[SlideRecord]) -> &str {
    slides
        .first()
        .map(|s| s.title.as_str())
        .filter(|t| !t.is_empty())
        .unwrap_or(PRODUCT_NAME)
}

/// Derive the output file name from the first slide's title.
///
/// Characters other than word characters, whitespace and `-` are dropped and
/// whitespace runs become a single `-`.
///
/// ```rust
/// use humu_slides::export::derive_filename;
/// use humu_slides::outline::SlideRecord;
///
/// let slides = vec![SlideRecord::new("AI: Impact & Future!", vec![])];
/// assert_eq!(derive_filename(&slides), "AI-Impact-Future.pptx");
/// ```
pub fn derive_filename(slides: &[SlideRecord]) -> String {
    let kept: String = deck_title(slides)
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || *c == '-' || c.is_whitespace())
        .collect();

    let stem = kept.split_whitespace().collect::<Vec<_>>().join("-");
    if stem.is_empty() {
        return format!("{}.pptx", PRODUCT_NAME.replace(' ', "-"));
    }
    format!("{stem}.pptx")
}

/// Export the session as `.pptx` bytes.
pub fn export_bytes(session: &EditingSession) -> Result<Vec<u8>> {
    build_deck(session)?.to_bytes()
}

/// Export the session into `dir` under the derived file name.
///
/// Returns the path written.
pub fn export_to_dir<P: AsRef<Path>>(session: &EditingSession, dir: P) -> Result<PathBuf> {
    let deck = build_deck(session)?;
    let path = dir.as_ref().join(derive_filename(session.slides()));
    deck.write_file(&path)?;
    info!(path = %path.display(), slides = deck.slide_count(), "deck written");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::ShapeKind;
    use crate::outline::generate;
    use quick_xml::Reader;
    use quick_xml::events::Event;
    use std::io::{Cursor, Read};

    fn slide_texts(bytes: &[u8], n: usize) -> Vec<String> {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut xml = String::new();
        archive
            .by_name(&format!("ppt/slides/slide{n}.xml"))
            .unwrap()
            .read_to_string(&mut xml)
            .unwrap();

        let mut reader = Reader::from_str(&xml);
        let mut texts = Vec::new();
        let mut current: Option<String> = None;
        loop {
            match reader.read_event().unwrap() {
                Event::Start(e) if e.name().as_ref() == b"a:t" => current = Some(String::new()),
                Event::End(e) if e.name().as_ref() == b"a:t" => texts.extend(current.take()),
                Event::Text(t) => {
                    if let Some(buf) = current.as_mut() {
                        buf.push_str(&String::from_utf8_lossy(&t));
                    }
                },
                Event::GeneralRef(r) => {
                    if let Some(buf) = current.as_mut() {
                        buf.push_str(match String::from_utf8_lossy(&r).as_ref() {
                            "amp" => "&",
                            "lt" => "<",
                            "gt" => ">",
                            "quot" => "\"",
                            "apos" => "'",
                            other => panic!("unexpected entity {other}"),
                        });
                    }
                },
                Event::Eof => break,
                _ => {},
            }
        }
        texts
    }

    #[test]
    fn test_filename_sanitization() {
        let name = |title: &str| derive_filename(&[SlideRecord::new(title, vec![])]);
        assert_eq!(name("AI: Impact & Future!"), "AI-Impact-Future.pptx");
        assert_eq!(name("Quantum Computing"), "Quantum-Computing.pptx");
        assert_eq!(name("  spaced   out  "), "spaced-out.pptx");
        assert_eq!(name("snake_case-and-dash"), "snake_case-and-dash.pptx");
        assert_eq!(name("!!!"), "Humu-Slides.pptx");
        assert_eq!(name(""), "Humu-Slides.pptx");
        assert_eq!(derive_filename(&[]), "Humu-Slides.pptx");
    }

    #[test]
    fn test_filename_keeps_unicode_letters() {
        let name = |title: &str| derive_filename(&[SlideRecord::new(title, vec![])]);
        assert_eq!(name("Café"), "Café.pptx");
        assert_eq!(name("Über Rust: 2024!"), "Über-Rust-2024.pptx");
        assert_eq!(name("量子 计算"), "量子-计算.pptx");
        assert_eq!(name("~ ✓ ~"), "Humu-Slides.pptx");
    }

    #[test]
    fn test_empty_session_is_refused() {
        let session = EditingSession::new();
        assert!(matches!(build_deck(&session), Err(Error::EmptySession)));
        assert!(matches!(export_bytes(&session), Err(Error::EmptySession)));
    }

    #[test]
    fn test_slide_layout_and_theme() {
        let mut session = EditingSession::with_outline(generate("Rust", 3));
        session.set_theme("minimalDark");
        let deck = build_deck(&session).unwrap();

        assert_eq!(deck.slide_count(), 3);
        assert_eq!(deck.metadata().title.as_deref(), Some("Rust"));
        assert_eq!(deck.metadata().author.as_deref(), Some("Humu Slides"));
        assert_eq!(deck.metadata().company.as_deref(), Some("Humu"));

        let slide = &deck.slides()[0];
        assert_eq!(slide.background().map(|c| c.to_hex()).as_deref(), Some("0B1220"));

        let shapes = slide.shapes();
        assert_eq!(shapes.len(), 4);
        assert_eq!(shapes[0].frame(), TITLE_FRAME);
        assert_eq!(shapes[0].text().as_deref(), Some("Rust"));
        match shapes[1].kind() {
            ShapeKind::Rectangle { frame, fill, line } => {
                assert_eq!(*frame, ACCENT_FRAME);
                assert_eq!(fill.map(|c| c.to_hex()).as_deref(), Some("60A5FA"));
                assert_eq!(fill, line);
            },
            other => panic!("expected accent rectangle, got {other:?}"),
        }
        match shapes[2].kind() {
            ShapeKind::TextBox { paragraphs, format, .. } => {
                assert_eq!(paragraphs.len(), 3);
                assert!(paragraphs.iter().all(|p| p.bullet));
                assert_eq!(format.size, Some(18.0));
                assert_eq!(format.color.map(|c| c.to_hex()).as_deref(), Some("E5E7EB"));
            },
            other => panic!("expected bullet box, got {other:?}"),
        }
        match shapes[3].kind() {
            ShapeKind::TextBox { format, .. } => {
                assert_eq!(format.align, Some(TextAlign::Right));
                assert_eq!(format.size, Some(10.0));
            },
            other => panic!("expected footer, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_title_falls_back() {
        let mut session = EditingSession::with_outline(generate("Rust", 3));
        session.select(1).unwrap();
        session.save_current("   ", "kept");
        session.select(0).unwrap();
        session.save_current("", "first");

        let deck = build_deck(&session).unwrap();
        assert_eq!(deck.metadata().title.as_deref(), Some("Humu Slides"));
        assert_eq!(deck.slides()[1].shapes()[0].text().as_deref(), Some("Slide 2"));
        assert_eq!(derive_filename(session.slides()), "Humu-Slides.pptx");
    }

    #[test]
    fn test_exported_package_text() {
        let session = EditingSession::with_outline(vec![SlideRecord::new(
            "R&D <Plan>",
            vec!["Budget".into(), "Q&A".into()],
        )]);
        let bytes = export_bytes(&session).unwrap();

        let texts = slide_texts(&bytes, 1);
        assert_eq!(texts, vec!["R&D <Plan>", "Budget", "Q&A", "Humu Slides"]);
    }

    #[test]
    fn test_export_to_dir() {
        let dir = tempfile::tempdir().unwrap();
        let session = EditingSession::with_outline(vec![SlideRecord::new(
            "AI: Impact & Future!",
            vec!["One".into()],
        )]);

        let path = export_to_dir(&session, dir.path()).unwrap();
        assert_eq!(path, dir.path().join("AI-Impact-Future.pptx"));

        let bytes = std::fs::read(&path).unwrap();
        let archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert!(archive.file_names().any(|n| n == "ppt/slides/slide1.xml"));
    }
}
