/// Horizontal rule sentinel: a block whose trimmed content is exactly the
/// sentinel emits a rule node and skips block parsing entirely.
pub struct ThematicBreak;

impl ThematicBreak {
    /// The whole-block sentinel.
    pub const SENTINEL: &'static str = "---";

    /// True when a block is a horizontal rule.
    pub fn matches(block: &str) -> bool {
        block.trim() == Self::SENTINEL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_sentinel_matches() {
        assert!(ThematicBreak::matches("---"));
    }

    #[test]
    fn surrounding_whitespace_is_tolerated() {
        assert!(ThematicBreak::matches("  ---\n"));
    }

    #[test]
    fn longer_runs_do_not_match() {
        assert!(!ThematicBreak::matches("----"));
    }

    #[test]
    fn sentinel_with_text_does_not_match() {
        assert!(!ThematicBreak::matches("--- text"));
    }
}
