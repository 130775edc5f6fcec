pub mod blocks;
pub mod inline;
pub mod tokens;

use thiserror::Error;

use crate::ast::Node;
use blocks::kinds::ThematicBreak;
use blocks::parse_block;
use inline::RewindError;
use tokens::TokenCursor;

/// The delimiter between blocks: one blank line.
const BLOCK_SEPARATOR: &str = "\n\n";

/// Failure of a parse call.
///
/// Malformed input is never an error — unterminated delimiters degrade to
/// literal text. The only failure mode is a delimiter rule rewinding its
/// cursor past the fragment start, which is a bookkeeping bug, not a
/// property of the document.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("inline scan rewound past the start of its fragment: {0}")]
    Rewind(#[from] RewindError),
}

/// Parses a whole document into the final node tree.
///
/// The trimmed document is split on blank lines. A block whose trimmed
/// content is exactly the horizontal-rule sentinel emits
/// [`Node::HorizontalRule`]; every other block is parsed and grouped into
/// paragraphs. An empty document parses to an empty sequence.
pub fn parse_document(text: &str) -> Result<Vec<Node>, ParseError> {
    let trimmed = text.trim();
    let Some(mut blocks) = TokenCursor::split(trimmed, BLOCK_SEPARATOR) else {
        return Ok(vec![]);
    };

    let mut out = Vec::new();
    while let Some(block) = blocks.advance() {
        if ThematicBreak::matches(block) {
            out.push(Node::HorizontalRule);
            continue;
        }
        out.extend(group_nodes(parse_block(block)?));
    }

    Ok(out)
}

/// Groups one block's flat node sequence into the reading-order tree.
///
/// Headings, block quotes and lists stand alone and close any open
/// paragraph; every other node is absorbed into the trailing
/// [`Node::Paragraph`], opening one when none is in progress.
fn group_nodes(nodes: Vec<Node>) -> Vec<Node> {
    let mut grouped: Vec<Node> = Vec::new();

    for node in nodes {
        match node {
            Node::Heading { .. } | Node::BlockQuote { .. } | Node::UnorderedList(_) => {
                grouped.push(node);
            }
            other => match grouped.last_mut() {
                Some(Node::Paragraph { nodes }) => nodes.push(other),
                _ => grouped.push(Node::Paragraph { nodes: vec![other] }),
            },
        }
    }

    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document() {
        assert_eq!(parse_document("").unwrap(), vec![]);
    }

    #[test]
    fn whitespace_document() {
        assert_eq!(parse_document("\n\n\n").unwrap(), vec![]);
    }

    #[test]
    fn single_line_becomes_a_paragraph() {
        assert_eq!(
            parse_document("Hello World").unwrap(),
            vec![Node::Paragraph {
                nodes: vec![Node::Text("Hello World".to_string())],
            }]
        );
    }

    #[test]
    fn horizontal_rule_block() {
        assert_eq!(parse_document("---").unwrap(), vec![Node::HorizontalRule]);
    }

    #[test]
    fn heading_stands_outside_paragraphs() {
        let nodes = parse_document("# Title\nintro text").unwrap();
        assert_eq!(
            nodes,
            vec![
                Node::Heading {
                    text: vec![Node::Text("Title".to_string())],
                    level: 1,
                },
                Node::Paragraph {
                    nodes: vec![Node::Text("intro text".to_string())],
                },
            ]
        );
    }

    #[test]
    fn paragraph_absorbs_consecutive_inline_nodes() {
        let nodes = parse_document("**a**\n*b*").unwrap();
        assert_eq!(
            nodes,
            vec![Node::Paragraph {
                nodes: vec![Node::Bold("a".to_string()), Node::Italic("b".to_string())],
            }]
        );
    }

    #[test]
    fn quote_closes_the_open_paragraph() {
        let nodes = parse_document("before\n> quoted\nafter").unwrap();
        assert_eq!(
            nodes,
            vec![
                Node::Paragraph {
                    nodes: vec![Node::Text("before".to_string())],
                },
                Node::BlockQuote {
                    text: vec![Node::Text("quoted".to_string())],
                },
                Node::Paragraph {
                    nodes: vec![Node::Text("after".to_string())],
                },
            ]
        );
    }

    #[test]
    fn list_stands_outside_paragraphs() {
        let nodes = parse_document("intro\n- a\n- b").unwrap();
        assert_eq!(nodes.len(), 2);
        assert!(matches!(nodes[0], Node::Paragraph { .. }));
        assert!(matches!(nodes[1], Node::UnorderedList(_)));
    }

    #[test]
    fn blocks_group_independently() {
        let nodes = parse_document("one\n\ntwo").unwrap();
        assert_eq!(
            nodes,
            vec![
                Node::Paragraph {
                    nodes: vec![Node::Text("one".to_string())],
                },
                Node::Paragraph {
                    nodes: vec![Node::Text("two".to_string())],
                },
            ]
        );
    }

    #[test]
    fn stray_newlines_between_blocks_are_harmless() {
        let nodes = parse_document("one\n\n\ntwo").unwrap();
        assert_eq!(nodes.len(), 2);
        assert!(matches!(nodes[0], Node::Paragraph { .. }));
        assert!(matches!(nodes[1], Node::Paragraph { .. }));
    }
}
