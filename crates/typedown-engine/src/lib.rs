pub mod ast;
pub mod parsing;

// Re-export key types for easier usage
pub use ast::{ListItem, Node, UnorderedList};
pub use parsing::{ParseError, parse_document};
