//! # Inline Kinds
//!
//! Inline constructs own their delimiter characters; the parser reads them
//! from here and never hardcodes a `*` or `` ` ``.
//!
//! - **`Emphasis`**: the shared `*` marker (doubled for bold)
//! - **`CodeSpan`**: the backtick, a verbatim zone
//! - **`Link`** / **`Image`**: bracket and parenthesis pairs, plus the
//!   image's leading bang

pub mod code_span;
pub mod emphasis;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::Emphasis;
pub use link::{Image, Link};
