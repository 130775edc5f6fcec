use std::sync::OnceLock;

use regex::Regex;

/// List item marker with its owned syntax knowledge: the leading dash and
/// the indentation unit that encodes nesting depth.
pub struct ListMarker;

impl ListMarker {
    /// The list marker character.
    pub const DASH: char = '-';

    /// Spaces per indentation unit when the line is space-indented.
    pub const INDENT_SPACES: usize = 3;

    /// Strips the marker and its separating space from a trimmed line.
    ///
    /// # Returns
    /// The item text after the marker (untrimmed), or `None` when the line
    /// is not a list item. The space requirement keeps rule sentinels and
    /// minus-signed text from reading as items.
    pub fn strip_marker(line: &str) -> Option<&str> {
        line.strip_prefix(Self::DASH)?.strip_prefix(' ')
    }

    /// Measures indentation depth on the raw (untrimmed) line: runs of
    /// three-space units count one per unit, else leading tabs count one
    /// per tab.
    pub fn indent_depth(line: &str) -> usize {
        static SPACE_INDENT: OnceLock<Regex> = OnceLock::new();
        static TAB_INDENT: OnceLock<Regex> = OnceLock::new();

        let spaces =
            SPACE_INDENT.get_or_init(|| Regex::new(r"^( {3})+").expect("Invalid indent regex"));
        let tabs = TAB_INDENT.get_or_init(|| Regex::new(r"^\t+").expect("Invalid indent regex"));

        if let Some(m) = spaces.find(line) {
            m.len() / Self::INDENT_SPACES
        } else if let Some(m) = tabs.find(line) {
            m.len()
        } else {
            0
        }
    }
}
