/// Link syntax: `[text](url)`. The bracketed text is itself inline-parsed;
/// the parenthesized url is taken verbatim.
pub struct Link;

impl Link {
    pub const OPEN: char = '[';
    pub const CLOSE: char = ']';
    pub const URL_OPEN: char = '(';
    pub const URL_CLOSE: char = ')';
}

/// Image syntax: `![text](url)` — a link with a two-character opener.
pub struct Image;

impl Image {
    pub const BANG: char = '!';
}
