//! Bracket pairing and parenthesis ownership.

use smallvec::SmallVec;
use sniff_ir::{Dialect, Token, TokenCode};

use super::previous_non_empty;

/// Pair every `( )`, `[ ]`, `#[ ]` and `{ }` with a stack per bracket kind.
///
/// An opener always links to itself; the closer link appears only once its
/// partner is found. Closers with nothing to close get no links at all.
pub(super) fn link(tokens: &mut [Token]) {
    let mut parens: SmallVec<[usize; 16]> = SmallVec::new();
    let mut squares: SmallVec<[usize; 16]> = SmallVec::new();
    let mut curlies: SmallVec<[usize; 16]> = SmallVec::new();

    for i in 0..tokens.len() {
        match tokens[i].code {
            TokenCode::OpenParenthesis => {
                tokens[i].parenthesis_opener = Some(i);
                parens.push(i);
            }
            TokenCode::CloseParenthesis => match parens.pop() {
                Some(open) => {
                    tokens[open].parenthesis_closer = Some(i);
                    tokens[i].parenthesis_opener = Some(open);
                    tokens[i].parenthesis_closer = Some(i);
                }
                None => tracing::trace!(ptr = i, "unmatched `)`"),
            },
            TokenCode::OpenSquareBracket => {
                tokens[i].bracket_opener = Some(i);
                squares.push(i);
            }
            TokenCode::Attribute => {
                tokens[i].attribute_opener = Some(i);
                squares.push(i);
            }
            TokenCode::CloseSquareBracket => match squares.pop() {
                Some(open) if tokens[open].code == TokenCode::Attribute => {
                    tokens[i].code = TokenCode::AttributeEnd;
                    tokens[open].attribute_closer = Some(i);
                    tokens[i].attribute_opener = Some(open);
                    tokens[i].attribute_closer = Some(i);
                }
                Some(open) => {
                    tokens[open].bracket_closer = Some(i);
                    tokens[i].bracket_opener = Some(open);
                    tokens[i].bracket_closer = Some(i);
                }
                None => tracing::trace!(ptr = i, "unmatched `]`"),
            },
            TokenCode::OpenCurlyBracket => {
                tokens[i].bracket_opener = Some(i);
                curlies.push(i);
            }
            TokenCode::CloseCurlyBracket => match curlies.pop() {
                Some(open) => {
                    tokens[open].bracket_closer = Some(i);
                    tokens[i].bracket_opener = Some(open);
                    tokens[i].bracket_closer = Some(i);
                }
                None => tracing::trace!(ptr = i, "unmatched `}}`"),
            },
            _ => {}
        }
    }

    let unclosed = parens.len() + squares.len() + curlies.len();
    if unclosed > 0 {
        tracing::trace!(unclosed, "brackets left open");
    }
}

/// Attach each closed parenthesis group to the construct that owns it.
///
/// The owner is the token before `(`, looking through `&` (`function &(`)
/// and through a declared name (`function foo(`, `function &foo(`). Only
/// codes the dialect lists as parenthesis owners qualify; a call on a plain
/// name has no owner.
pub(super) fn assign_parenthesis_owners(tokens: &mut [Token], dialect: &Dialect) {
    for open in 0..tokens.len() {
        if tokens[open].code != TokenCode::OpenParenthesis {
            continue;
        }
        let Some(close) = tokens[open].parenthesis_closer else {
            continue;
        };
        let Some(owner) = find_owner(tokens, open) else {
            continue;
        };
        if !dialect.is_parenthesis_owner(tokens[owner].code) {
            continue;
        }
        for ptr in [owner, open, close] {
            let token = &mut tokens[ptr];
            token.parenthesis_opener = Some(open);
            token.parenthesis_closer = Some(close);
            token.parenthesis_owner = Some(owner);
        }
    }
}

fn find_owner(tokens: &[Token], open: usize) -> Option<usize> {
    let before_amp = |i: usize| match tokens[i].code {
        TokenCode::BitwiseAnd => previous_non_empty(tokens, i),
        _ => Some(i),
    };

    let prev = before_amp(previous_non_empty(tokens, open)?)?;
    if tokens[prev].code != TokenCode::String {
        return Some(prev);
    }
    // `function name(` / `function &name(`
    let keyword = before_amp(previous_non_empty(tokens, prev)?)?;
    (tokens[keyword].code == TokenCode::Function).then_some(keyword)
}
