/// Code span inline type with its owned delimiter.
///
/// Code spans are verbatim: no other delimiter is recognized between the
/// opening and closing backtick.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: char = '`';
}
