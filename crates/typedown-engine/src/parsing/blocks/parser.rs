use crate::ast::{ListItem, Node, UnorderedList};
use crate::parsing::inline::parse_inline;
use crate::parsing::tokens::TokenCursor;
use crate::parsing::ParseError;

use super::classify::{classify, LineClass};

/// The delimiter between the lines of one block.
const LINE_SEPARATOR: &str = "\n";

/// Parses one block of text into an ordered sequence of nodes.
///
/// Lines are classified one at a time. Consecutive quoted lines merge into a
/// single [`Node::BlockQuote`]; consecutive list-marker lines feed a single
/// [`Node::UnorderedList`], each item attached per its indentation depth.
/// Plain lines contribute their inline nodes unwrapped — the document-level
/// grouping step decides what becomes a paragraph.
pub fn parse_block(block: &str) -> Result<Vec<Node>, ParseError> {
    let Some(mut lines) = TokenCursor::split(block, LINE_SEPARATOR) else {
        return Ok(vec![]);
    };

    let mut out = Vec::new();
    while let Some(line) = lines.advance() {
        match classify(line) {
            LineClass::Blank => {}
            LineClass::Heading { level, text } => {
                let text = parse_inline(&text)?;
                out.push(Node::Heading { text, level });
            }
            LineClass::Quote { text } => {
                let nodes = parse_inline(&text)?;
                match out.last_mut() {
                    Some(Node::BlockQuote { text }) => text.extend(nodes),
                    _ => out.push(Node::BlockQuote { text: nodes }),
                }
            }
            LineClass::Item { depth, text } => {
                let item = ListItem::new(parse_inline(&text)?, depth);
                match out.last_mut() {
                    Some(Node::UnorderedList(list)) => list.insert(item),
                    _ => {
                        let mut list = UnorderedList::new();
                        list.insert(item);
                        out.push(Node::UnorderedList(list));
                    }
                }
            }
            LineClass::Text { text } => out.extend(parse_inline(&text)?),
        }
    }

    Ok(out)
}
