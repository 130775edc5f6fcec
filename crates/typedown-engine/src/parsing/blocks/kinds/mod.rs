//! # Block Kinds
//!
//! Block-level constructs own their syntax knowledge: marker characters and
//! the strip functions that remove them. The classifier calls these; it
//! never hardcodes a `#` or `>`.

pub mod block_quote;
pub mod heading;
pub mod list_item;
pub mod thematic_break;

pub use block_quote::BlockQuote;
pub use heading::Heading;
pub use list_item::ListMarker;
pub use thematic_break::ThematicBreak;
