/// Emphasis delimiters share one marker character: two consecutive stars
/// open and close bold, a single star opens and closes italic. The parser
/// disambiguates with one character of lookahead on both ends.
pub struct Emphasis;

impl Emphasis {
    /// The star character used by both bold and italic.
    pub const STAR: char = '*';
}
