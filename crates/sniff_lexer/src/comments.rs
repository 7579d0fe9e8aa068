//! Comment Structurer
//!
//! Splits one doc comment (`/** ... */`) into sub-tokens so rules can reason
//! about its stars, tags and text:
//!
//! ```text
//! /**␤ * Summary.␤ * @param int $a␤ */
//! OPEN WS␤ WS STAR WS STRING WS␤ WS STAR WS TAG WS STRING WS␤ WS CLOSE
//! ```
//!
//! Every byte of the comment lands in exactly one sub-token, so the
//! concatenated original text of the output equals the input.

use sniff_ir::{Token, TokenCode};

use crate::position::{split_lines, Placer};

const OPEN: &str = "/**";
const CLOSE: &str = "*/";

/// Tags reserved for inline tool directives. They read as plain text.
const DIRECTIVE_PREFIXES: &[&str] = &["@phpcs:", "@codingStandards"];

/// `/**` followed by whitespace. `/**/` is an ordinary comment.
pub(crate) fn is_doc_comment(text: &str) -> bool {
    text.starts_with(OPEN)
        && text
            .as_bytes()
            .get(OPEN.len())
            .is_some_and(|&b| matches!(b, b' ' | b'\t' | b'\r' | b'\n'))
}

/// Structure `text` (one whole doc comment, original bytes) into sub-tokens.
///
/// `placer` must sit at the comment's start position. `base` is the stack
/// pointer the open tag will occupy; every produced token links back to it
/// through `comment_opener`, and to the close tag through `comment_closer`
/// when the comment is terminated. An unterminated comment has no closer.
pub(crate) fn structure(text: &str, mut placer: Placer, base: usize) -> Vec<Token> {
    let mut pieces = Pieces::default();

    let body = match text.strip_prefix(OPEN) {
        Some(body) => {
            pieces.push(TokenCode::DocCommentOpenTag, OPEN);
            body
        }
        None => text,
    };
    let (body, closed) = match body.strip_suffix(CLOSE) {
        Some(body) => (body, true),
        None => (body, false),
    };

    for (index, line) in split_lines(body).enumerate() {
        structure_line(&mut pieces, line, index > 0);
    }

    if closed {
        pieces.push(TokenCode::DocCommentCloseTag, CLOSE);
    }

    let mut tokens: Vec<Token> = pieces
        .0
        .into_iter()
        .map(|(code, piece)| placer.place(code, piece))
        .collect();

    let closer = closed.then(|| base + tokens.len() - 1);
    let tags: Vec<usize> = tokens
        .iter()
        .enumerate()
        .filter(|(_, t)| t.code == TokenCode::DocCommentTag)
        .map(|(offset, _)| base + offset)
        .collect();
    for token in &mut tokens {
        token.comment_opener = Some(base);
        token.comment_closer = closer;
    }
    if let Some(opener) = tokens.first_mut() {
        opener.comment_tags = tags;
    }
    tokens
}

/// Ordered `(code, text)` pieces, empty text dropped.
#[derive(Default)]
struct Pieces<'a>(Vec<(TokenCode, &'a str)>);

impl<'a> Pieces<'a> {
    fn push(&mut self, code: TokenCode, text: &'a str) {
        if !text.is_empty() {
            self.0.push((code, text));
        }
    }
}

/// One body line: `WS [STAR] WS [TAG WS] [STRING] [WS] [EOL]`.
fn structure_line<'a>(pieces: &mut Pieces<'a>, line: &'a str, continuation: bool) {
    let (content, eol) = split_eol(line);

    let (ws, rest) = split_blanks(content);
    pieces.push(TokenCode::DocCommentWhitespace, ws);

    let rest = match rest.strip_prefix('*') {
        Some(after) if continuation => {
            pieces.push(TokenCode::DocCommentStar, "*");
            let (ws, after) = split_blanks(after);
            pieces.push(TokenCode::DocCommentWhitespace, ws);
            after
        }
        _ => rest,
    };

    let rest = match tag_name(rest) {
        Some(tag) => {
            pieces.push(TokenCode::DocCommentTag, tag);
            let (ws, after) = split_blanks(&rest[tag.len()..]);
            pieces.push(TokenCode::DocCommentWhitespace, ws);
            after
        }
        None => rest,
    };

    let text = rest.trim_end_matches([' ', '\t']);
    pieces.push(TokenCode::DocCommentString, text);
    pieces.push(TokenCode::DocCommentWhitespace, &rest[text.len()..]);

    pieces.push(TokenCode::DocCommentWhitespace, eol);
}

/// `@name` up to the next blank, unless it is a tool directive.
fn tag_name(text: &str) -> Option<&str> {
    if !text.starts_with('@') {
        return None;
    }
    let end = text.find([' ', '\t']).unwrap_or(text.len());
    let tag = &text[..end];
    let directive = DIRECTIVE_PREFIXES
        .iter()
        .any(|prefix| tag.starts_with(prefix));
    (tag.len() > 1 && !directive).then_some(tag)
}

fn split_blanks(text: &str) -> (&str, &str) {
    let end = text.len() - text.trim_start_matches([' ', '\t']).len();
    text.split_at(end)
}

fn split_eol(line: &str) -> (&str, &str) {
    let content = line.trim_end_matches(['\r', '\n']);
    line.split_at(content.len())
}

#[cfg(test)]
mod tests;
