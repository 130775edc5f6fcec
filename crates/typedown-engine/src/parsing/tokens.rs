/// A cursor over the pieces of an input split on a fixed delimiter.
///
/// The document parser drives one of these over blank-line-separated blocks
/// and the block parser drives one over newline-separated lines.
pub struct TokenCursor<'a> {
    tokens: Vec<&'a str>,
    index: usize,
}

impl<'a> TokenCursor<'a> {
    /// Splits `input` on `delimiter`.
    ///
    /// Returns `None` for an empty input or an empty delimiter — there is
    /// nothing to parse, and callers propagate that as an empty result
    /// rather than an error.
    pub fn split(input: &'a str, delimiter: &str) -> Option<Self> {
        if input.is_empty() || delimiter.is_empty() {
            return None;
        }
        Some(Self {
            tokens: input.split(delimiter).collect(),
            index: 0,
        })
    }

    /// Returns the piece at the cursor without advancing.
    ///
    /// # Panics
    /// Panics when the cursor has moved past the end; check
    /// [`at_end`](Self::at_end) first or iterate with
    /// [`advance`](Self::advance), which bounds-checks itself.
    pub fn current(&self) -> &'a str {
        self.tokens[self.index]
    }

    /// Returns the piece at the cursor and advances past it, or `None` when
    /// every piece has been consumed.
    pub fn advance(&mut self) -> Option<&'a str> {
        let token = self.tokens.get(self.index).copied()?;
        self.index += 1;
        Some(token)
    }

    /// True once every piece has been consumed.
    pub fn at_end(&self) -> bool {
        self.index >= self.tokens.len()
    }
}
