//! # Inline Parsing
//!
//! Cursor-based parsing of one text fragment with attempt-and-rewind
//! backtracking.
//!
//! Each delimiter rule (bold, italic, code, link, image) consumes forward
//! looking for its closer and rewinds by exactly the characters it consumed
//! when the closer is missing, so malformed syntax degrades to literal text
//! and never errors. Code spans are verbatim zones; link and image text is
//! recursively inline-parsed.
//!
//! ## Modules
//!
//! - **`cursor`**: character cursor with lookahead, lookbehind and
//!   multi-step rewind
//! - **`kinds`**: inline constructs owning their delimiter characters
//! - **`parser`**: `parse_inline()` main loop, one function per rule

pub mod cursor;
pub mod kinds;
pub mod parser;

pub use cursor::{Cursor, RewindError};
pub use parser::parse_inline;
