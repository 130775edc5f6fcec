use serde::{Deserialize, Serialize};

use super::Node;

/// A list item with nested children.
///
/// Items form a tree: each child sits one nesting level below its parent.
/// `ordered`, `index` and `task` are carried for consumers that build or
/// annotate lists; the line classifier only produces unordered items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    /// Inline content of the item's own line.
    pub text: Vec<Node>,
    /// Items nested one level below this one.
    pub children: Vec<ListItem>,
    /// Nesting level, 0 for top-level items.
    pub level: usize,
    /// Whether the item belongs to an ordered list.
    pub ordered: bool,
    /// Ordinal position within an ordered list.
    pub index: usize,
    /// Whether the item is a task entry.
    pub task: bool,
}

impl ListItem {
    /// Creates an unordered, untasked item at the given nesting level.
    pub fn new(text: Vec<Node>, level: usize) -> Self {
        Self {
            text,
            children: Vec::new(),
            level,
            ordered: false,
            index: 0,
            task: false,
        }
    }

    /// Hands `item` to the deepest descendant on the rightmost spine whose
    /// level is one less than the item's. Returns the item back when no such
    /// ancestor exists under `self`.
    fn adopt(&mut self, item: ListItem) -> Option<ListItem> {
        let item = match self.children.last_mut() {
            Some(last) => match last.adopt(item) {
                None => return None,
                Some(item) => item,
            },
            None => item,
        };

        if item.level == self.level + 1 {
            self.children.push(item);
            return None;
        }
        Some(item)
    }
}

/// An unordered list holding the top-level item trees.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UnorderedList {
    pub items: Vec<ListItem>,
}

impl UnorderedList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches an item per its nesting level: to the deepest item on the
    /// rightmost spine whose level is one less, else at top level.
    pub fn insert(&mut self, item: ListItem) {
        let item = match self.items.last_mut() {
            Some(last) => match last.adopt(item) {
                None => return,
                Some(item) => item,
            },
            None => item,
        };
        self.items.push(item);
    }
}
