//! Merge pass: re-emit primitive tokens into the final output vector.
//!
//! Merged lexemes:
//! - `(` blanks `int` blanks `)` → `T_INT_CAST` (and the other casts)
//! - `?` `->` → `T_NULLSAFE_OBJECT_OPERATOR`
//! - `??` `=` → `T_COALESCE_EQUAL`
//! - `yield` blanks `from` → `T_YIELD_FROM`
//!
//! Doc comments are handed to the comment structurer and their sub-tokens
//! appended in place of the single comment token.

use sniff_ir::{Token, TokenCode};

use crate::comments;
use crate::keywords;
use crate::position::Placer;
use crate::TokenizerError;

pub(super) fn emit(primitive: Vec<Token>, tab_width: u32) -> Result<Vec<Token>, TokenizerError> {
    let mut out: Vec<Token> = Vec::with_capacity(primitive.len());
    let mut i = 0;
    while i < primitive.len() {
        if let Some((merged, consumed)) = merge_at(&primitive, i) {
            tracing::trace!(ptr = out.len(), code = merged.code.name(), "merged");
            out.push(merged);
            i += consumed;
            continue;
        }

        let token = &primitive[i];
        if token.code == TokenCode::Comment && comments::is_doc_comment(token.original()) {
            let text = token.original();
            let placer = Placer::at(token.line, token.column, tab_width);
            let parts = comments::structure(text, placer, out.len());
            let joined: String = parts.iter().map(Token::original).collect();
            if joined != text {
                return Err(TokenizerError::invariant(format!(
                    "doc comment at line {} does not round-trip",
                    token.line
                )));
            }
            out.extend(parts);
        } else {
            out.push(token.clone());
        }
        i += 1;
    }
    Ok(out)
}

/// A merged token starting at `i` and how many primitive tokens it covers.
fn merge_at(tokens: &[Token], i: usize) -> Option<(Token, usize)> {
    let token = &tokens[i];
    match token.code {
        TokenCode::OpenParenthesis => cast(tokens, i),
        TokenCode::InlineThen => adjacent(tokens, i, TokenCode::ObjectOperator)
            .then(|| (join(tokens, i, 2, TokenCode::NullsafeObjectOperator), 2)),
        TokenCode::Coalesce => adjacent(tokens, i, TokenCode::Equal)
            .then(|| (join(tokens, i, 2, TokenCode::CoalesceEqual), 2)),
        TokenCode::Yield => yield_from(tokens, i),
        _ => None,
    }
}

/// `tokens[i + 1]` has `code` and follows with no gap.
fn adjacent(tokens: &[Token], i: usize, code: TokenCode) -> bool {
    tokens.get(i + 1).is_some_and(|next| next.code == code)
}

/// Skip blank (single-line whitespace) tokens starting at `i`.
fn skip_blanks(tokens: &[Token], mut i: usize) -> usize {
    while tokens
        .get(i)
        .is_some_and(|t| t.code == TokenCode::Whitespace && !t.content.contains(['\n', '\r']))
    {
        i += 1;
    }
    i
}

fn cast(tokens: &[Token], open: usize) -> Option<(Token, usize)> {
    let word = skip_blanks(tokens, open + 1);
    let code = keywords::cast(&tokens.get(word)?.content)?;
    let close = skip_blanks(tokens, word + 1);
    if tokens.get(close)?.code != TokenCode::CloseParenthesis {
        return None;
    }
    let count = close - open + 1;
    Some((join(tokens, open, count, code), count))
}

fn yield_from(tokens: &[Token], i: usize) -> Option<(Token, usize)> {
    let from = skip_blanks(tokens, i + 1);
    if from == i + 1 {
        return None;
    }
    let word = tokens.get(from)?;
    if word.code != TokenCode::String || !word.content.eq_ignore_ascii_case("from") {
        return None;
    }
    let count = from - i + 1;
    Some((join(tokens, i, count, TokenCode::YieldFrom), count))
}

/// One token covering `tokens[start..start + count]`, placed at the first.
fn join(tokens: &[Token], start: usize, count: usize, code: TokenCode) -> Token {
    let parts = &tokens[start..start + count];
    let content: String = parts.iter().map(|t| t.content.as_str()).collect();
    let first = &parts[0];
    let mut merged = Token::new(code, content, first.line, first.column);
    if parts.iter().any(|t| t.orig_content.is_some()) {
        merged.orig_content = Some(parts.iter().map(Token::original).collect());
    }
    merged
}

#[cfg(test)]
mod tests;
