use crate::ast::Node;
use crate::parsing::ParseError;

use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Emphasis, Image, Link},
};

/// Parses one fragment of raw text into an ordered sequence of inline nodes.
///
/// # Backtracking
/// Each delimiter rule consumes characters while looking for its closer and
/// rewinds by exactly the count it consumed when no closer exists, so control
/// returns to just after the character that opened the attempt. Unterminated
/// constructs therefore degrade to literal text with zero information loss.
///
/// # Precedence
/// Bold is tried before italic (both start with a star); the image rule only
/// fires when the bang is immediately followed by a bracket. A character no
/// rule claims is appended to the trailing [`Node::Text`], opening one if
/// needed.
///
/// Empty and all-whitespace fragments short-circuit to an empty sequence.
pub fn parse_inline(fragment: &str) -> Result<Vec<Node>, ParseError> {
    if fragment.trim().is_empty() {
        return Ok(vec![]);
    }

    let mut cur = Cursor::new(fragment);
    let mut out = Vec::new();

    while let Some(c) = cur.advance() {
        let matched = if c == Emphasis::STAR && cur.peek_next() == Some(Emphasis::STAR) {
            bold_span(&mut cur, &mut out)?
        } else if c == Emphasis::STAR {
            italic_span(&mut cur, &mut out)?
        } else if c == CodeSpan::TICK {
            code_span(&mut cur, &mut out)?
        } else if c == Link::OPEN {
            link_span(&mut cur, &mut out)?
        } else if c == Image::BANG && cur.peek_next() == Some(Link::OPEN) {
            image_span(&mut cur, &mut out)?
        } else {
            false
        };

        if !matched {
            push_literal(&mut out, c);
        }
    }

    Ok(out)
}

/// Appends a character to the trailing text node, coalescing adjacent runs.
fn push_literal(out: &mut Vec<Node>, c: char) {
    if let Some(Node::Text(text)) = out.last_mut() {
        text.push(c);
    } else {
        out.push(Node::Text(c.to_string()));
    }
}

/// Emits a span node unless its content trims to nothing. A terminated but
/// blank span still counts as consumed; it just produces no node.
fn push_span(out: &mut Vec<Node>, node: fn(String) -> Node, content: String) {
    if !content.trim().is_empty() {
        out.push(node(content));
    }
}

/// Bold rule. The opening star is already consumed; its partner is consumed
/// here. Closes on two consecutive stars.
fn bold_span(cur: &mut Cursor, out: &mut Vec<Node>) -> Result<bool, ParseError> {
    let mark = cur.offset();
    cur.advance(); // second star of the opener

    let mut content = String::new();
    while let Some(c) = cur.advance() {
        if c == Emphasis::STAR && cur.peek_next() == Some(Emphasis::STAR) {
            cur.advance(); // second star of the closer
            push_span(out, Node::Bold, content);
            return Ok(true);
        }
        content.push(c);
    }

    cur.rewind(cur.offset() - mark)?;
    Ok(false)
}

/// Italic rule. Fires on a lone star; closes on a star that is not followed
/// by another star, which keeps an adjacent bold closer out of reach.
fn italic_span(cur: &mut Cursor, out: &mut Vec<Node>) -> Result<bool, ParseError> {
    let mark = cur.offset();

    let mut content = String::new();
    while let Some(c) = cur.advance() {
        if c == Emphasis::STAR && cur.peek_next() != Some(Emphasis::STAR) {
            push_span(out, Node::Italic, content);
            return Ok(true);
        }
        content.push(c);
    }

    cur.rewind(cur.offset() - mark)?;
    Ok(false)
}

/// Code rule. Content is verbatim up to the next backtick; nothing nests.
fn code_span(cur: &mut Cursor, out: &mut Vec<Node>) -> Result<bool, ParseError> {
    let mark = cur.offset();

    let mut content = String::new();
    while let Some(c) = cur.advance() {
        if c == CodeSpan::TICK {
            push_span(out, Node::Code, content);
            return Ok(true);
        }
        content.push(c);
    }

    cur.rewind(cur.offset() - mark)?;
    Ok(false)
}

/// Link rule. The bracketed text is re-run through [`parse_inline`], so link
/// text carries a fully resolved inline tree. A missing closer at either
/// stage rewinds the whole attempt.
fn link_span(cur: &mut Cursor, out: &mut Vec<Node>) -> Result<bool, ParseError> {
    let mark = cur.offset();

    if let Some((text, url)) = scan_link_body(cur) {
        let text = parse_inline(&text)?;
        out.push(Node::Link { text, url });
        return Ok(true);
    }

    cur.rewind(cur.offset() - mark)?;
    Ok(false)
}

/// Image rule. Identical to the link rule past the bang; the bracket that
/// the lookahead saw is consumed here.
fn image_span(cur: &mut Cursor, out: &mut Vec<Node>) -> Result<bool, ParseError> {
    let mark = cur.offset();
    cur.advance(); // opening bracket

    if let Some((text, url)) = scan_link_body(cur) {
        let text = parse_inline(&text)?;
        out.push(Node::Image { text, url });
        return Ok(true);
    }

    cur.rewind(cur.offset() - mark)?;
    Ok(false)
}

/// Scans `text](url)` with the opening bracket already consumed. Returns the
/// raw text and url on full success, `None` as soon as any closer is missing
/// (the caller rewinds).
fn scan_link_body(cur: &mut Cursor) -> Option<(String, String)> {
    let mut text = String::new();
    loop {
        match cur.advance() {
            None => return None,
            Some(c) if c == Link::CLOSE => break,
            Some(c) => text.push(c),
        }
    }

    if cur.current() != Some(Link::URL_OPEN) {
        return None;
    }
    cur.advance();

    let mut url = String::new();
    loop {
        match cur.advance() {
            None => return None,
            Some(c) if c == Link::URL_CLOSE => break,
            Some(c) => url.push(c),
        }
    }

    Some((text, url))
}
