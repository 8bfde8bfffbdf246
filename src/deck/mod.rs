//! PowerPoint (.pptx) deck writer.
//!
//! Builds PresentationML packages from absolutely positioned shapes: text
//! boxes with bulleted or plain paragraphs, and filled rectangles. Every deck
//! carries one slide master, one blank layout and the stock Office theme.
//!
//! ```rust
//! use humu_slides::deck::{Deck, Frame, Paragraph, TextFormat};
//!
//! let mut deck = Deck::new();
//! let slide = deck.add_slide();
//! slide.add_text("Hello", Frame::new(0.5, 0.5, 9.0, 1.0), TextFormat::new().with_bold(true));
//! slide.add_text_runs(
//!     vec![Paragraph::bulleted("First"), Paragraph::bulleted("Second")],
//!     Frame::new(0.75, 1.8, 8.5, 4.5),
//!     TextFormat::new(),
//! );
//! assert_eq!(deck.slide_count(), 1);
//! ```

pub mod constants;
pub mod format;
pub mod metadata;
pub mod package;
pub mod presentation;
pub mod shape;
pub mod slide;
pub mod template;

pub use format::{TextAlign, TextFormat};
pub use metadata::DeckMetadata;
pub use presentation::Deck;
pub use shape::{Frame, Paragraph, Shape, ShapeKind};
pub use slide::DeckSlide;
