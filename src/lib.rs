//! Humu Slides - topic to slide outline to PowerPoint deck
//!
//! Turns a topic into an editable slide outline and exports it as a `.pptx`
//! presentation.
//!
//! # Features
//!
//! - **Outline generation**: a fixed bank of slide templates, cycled to the
//!   requested count, with the topic substituted
//! - **Remote outlines**: optional HTTP endpoint tried first, with automatic
//!   fallback to local generation (`remote` feature, on by default)
//! - **Editing session**: select, edit, add and delete slides with a cursor
//!   that always points at an existing slide
//! - **Deck export**: themed `.pptx` packages written by the [`deck`] module
//!
//! # Example
//!
//! ```no_run
//! use humu_slides::{Config, EditingSession, GenerateRequest, Studio};
//!
//! # async fn run() -> humu_slides::Result<()> {
//! let studio = Studio::new(&Config::default())?;
//! let mut session = EditingSession::new();
//!
//! let request = GenerateRequest::new("Quantum Computing")
//!     .with_slide_count(5)
//!     .with_theme("minimalDark");
//! studio.generate(&mut session, &request).await?;
//!
//! session.select(1)?;
//! session.save_current("What is a qubit?", "Superposition\nEntanglement");
//!
//! let path = studio.export(&session)?;
//! println!("wrote {}", path.display());
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Building a deck directly
//!
//! ```rust
//! use humu_slides::common::RGBColor;
//! use humu_slides::deck::{Deck, Frame, TextFormat};
//!
//! let mut deck = Deck::new();
//! let slide = deck.add_slide();
//! slide.set_background(RGBColor::new(0xF0, 0xFD, 0xF4));
//! slide.add_text("Hello", Frame::new(0.5, 0.5, 9.0, 1.0), TextFormat::new().with_size(30.0));
//! let bytes = deck.to_bytes().unwrap();
//! assert!(!bytes.is_empty());
//! ```

/// Shared types: errors, colors, units and XML escaping
pub mod common;

/// Configuration loaded from YAML
pub mod config;

/// PresentationML (.pptx) writer
pub mod deck;

/// Session to deck mapping and file naming
pub mod export;

/// Slide records, local generation and the remote endpoint
pub mod outline;

/// Editing session state
pub mod session;

/// Line-oriented editor
pub mod shell;

/// Generate flow
pub mod studio;

/// Named themes
pub mod theme;

// Re-export commonly used types for convenience
pub use common::{Error, RGBColor, Result};
pub use config::Config;
pub use outline::{RemoteOutline, RemoteOutlineAdapter, SlideRecord, UnavailableReason};
pub use session::EditingSession;
pub use studio::{GenerateRequest, OutlineSource, Studio};
pub use theme::Theme;
