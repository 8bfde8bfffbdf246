//! Unified error type for humu-slides.
//!
//! Remote outline failures never show up here: the adapter reports them as
//! [`RemoteOutline::Unavailable`](crate::outline::RemoteOutline) instead.
use thiserror::Error;

/// Main error type for humu-slides operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The topic was empty after trimming
    #[error("Please enter a topic.")]
    EmptyTopic,

    /// A slide index outside the current outline was requested
    #[error("Slide index {index} is out of range (outline has {len} slides)")]
    SlideIndexOutOfRange { index: usize, len: usize },

    /// An operation that needs at least one slide ran on an empty outline
    #[error("The outline has no slides")]
    EmptySession,

    /// A color string was not six hexadecimal digits
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// XML generation or inspection error
    #[error("XML error: {0}")]
    Xml(String),

    /// ZIP archive error
    #[error("ZIP error: {0}")]
    Zip(String),

    /// JSON (outline file) error
    #[error("JSON error: {0}")]
    Json(String),

    /// Invalid or unreadable configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP client could not be constructed
    #[error("HTTP client error: {0}")]
    Http(String),
}

/// Result type for humu-slides operations.
pub type Result<T> = std::result::Result<T, Error>;
