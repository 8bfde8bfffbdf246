//! XML text helpers shared by the deck writer.

mod escape;

pub use escape::{escape_text, escape_xml};
