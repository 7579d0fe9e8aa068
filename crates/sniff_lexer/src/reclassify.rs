//! Bounded re-classification of context-sensitive words.
//!
//! The cooker resolves every keyword spelling to its keyword code. Many of
//! those spellings are also valid identifiers in some positions (`$a->list`,
//! `Foo::class`, `function match()`, named arguments). This pass looks at
//! the previous and next non-empty token only and demotes or promotes the
//! code accordingly. It never looks further than that window.

use sniff_ir::{Token, TokenCode};

use crate::keywords;

/// Settle context-sensitive codes in a primitive token stream.
pub(crate) fn reclassify(tokens: &mut [Token]) {
    for i in 0..tokens.len() {
        let code = tokens[i].code;
        let is_word = is_keyword(&tokens[i]);
        if !is_word && code != TokenCode::String {
            continue;
        }

        let prev = previous_code(tokens, i);
        let next = next_code(tokens, i);
        let settled = if is_word {
            keyword(tokens, i, code, prev, next)
        } else {
            identifier(prev, next)
        };

        if settled != code {
            tracing::trace!(
                ptr = i,
                from = code.name(),
                to = settled.name(),
                "reclassified"
            );
            tokens[i].code = settled;
        }
    }
}

/// A token whose code came from keyword resolution of its own text.
fn is_keyword(token: &Token) -> bool {
    token.code != TokenCode::String && keywords::lookup(&token.content) == Some(token.code)
}

fn keyword(
    tokens: &[Token],
    i: usize,
    code: TokenCode,
    prev: Option<TokenCode>,
    next: Option<TokenCode>,
) -> TokenCode {
    if is_named_argument(prev, next) {
        return TokenCode::ParamName;
    }

    match prev {
        // Member and constant names: `$a->list`, `Foo::class`, `?->print`.
        Some(TokenCode::ObjectOperator | TokenCode::DoubleColon) => return TokenCode::String,
        // Declared names: `function list()`, `function &match()`, `const IF`.
        Some(TokenCode::Function | TokenCode::Const) => return TokenCode::String,
        Some(TokenCode::BitwiseAnd)
            if previous_index(tokens, i)
                .and_then(|amp| previous_code(tokens, amp))
                == Some(TokenCode::Function) =>
        {
            return TokenCode::String;
        }
        // Name segments: `Foo\List`, `\Exception`.
        Some(TokenCode::NsSeparator) => return TokenCode::String,
        _ => {}
    }
    if next == Some(TokenCode::NsSeparator) && code != TokenCode::Namespace {
        return TokenCode::String;
    }

    match code {
        TokenCode::Function => match next {
            Some(TokenCode::OpenParenthesis) => TokenCode::Closure,
            Some(TokenCode::BitwiseAnd)
                if next_index(tokens, i).and_then(|amp| next_code(tokens, amp))
                    == Some(TokenCode::OpenParenthesis) =>
            {
                TokenCode::Closure
            }
            _ => code,
        },
        TokenCode::Class => {
            let after_new = match prev {
                Some(TokenCode::New) => true,
                Some(TokenCode::Readonly) => {
                    previous_index(tokens, i).and_then(|ro| previous_code(tokens, ro))
                        == Some(TokenCode::New)
                }
                _ => false,
            };
            if after_new {
                TokenCode::AnonClass
            } else {
                code
            }
        }
        TokenCode::Fn => match next {
            Some(TokenCode::OpenParenthesis | TokenCode::BitwiseAnd) => code,
            _ => TokenCode::String,
        },
        TokenCode::Match | TokenCode::Array | TokenCode::List => match next {
            Some(TokenCode::OpenParenthesis) => code,
            _ => TokenCode::String,
        },
        TokenCode::Enum => match next {
            Some(TokenCode::String) => code,
            // `enum Suit`, where the name is itself a keyword spelling.
            Some(other) if other != TokenCode::OpenParenthesis && is_name_like(tokens, i) => code,
            _ => TokenCode::String,
        },
        // `readonly(...)` is a call to a function of that name.
        TokenCode::Readonly => match next {
            Some(TokenCode::OpenParenthesis) => TokenCode::String,
            _ => code,
        },
        _ => code,
    }
}

fn identifier(prev: Option<TokenCode>, next: Option<TokenCode>) -> TokenCode {
    if is_named_argument(prev, next) {
        return TokenCode::ParamName;
    }
    let statement_start = matches!(
        prev,
        None | Some(
            TokenCode::Semicolon
                | TokenCode::OpenCurlyBracket
                | TokenCode::CloseCurlyBracket
                | TokenCode::OpenTag
        )
    );
    if statement_start && next == Some(TokenCode::Colon) {
        return TokenCode::GotoLabel;
    }
    TokenCode::String
}

/// `foo(name: $value)`: a word after `(` or `,` and before `:`.
fn is_named_argument(prev: Option<TokenCode>, next: Option<TokenCode>) -> bool {
    matches!(prev, Some(TokenCode::OpenParenthesis | TokenCode::Comma))
        && next == Some(TokenCode::Colon)
}

/// The word after an `enum` keyword is a name that happens to be spelled
/// like a keyword, followed by `{`, `:` or `implements`.
fn is_name_like(tokens: &[Token], enum_ptr: usize) -> bool {
    let Some(name) = next_index(tokens, enum_ptr) else {
        return false;
    };
    let word = tokens[name]
        .content
        .bytes()
        .next()
        .is_some_and(|b| b == b'_' || b.is_ascii_alphabetic() || b >= 0x80);
    word && matches!(
        next_code(tokens, name),
        Some(TokenCode::OpenCurlyBracket | TokenCode::Colon | TokenCode::Implements)
    )
}

fn previous_index(tokens: &[Token], i: usize) -> Option<usize> {
    (0..i).rev().find(|&j| !tokens[j].is_empty())
}

fn next_index(tokens: &[Token], i: usize) -> Option<usize> {
    (i + 1..tokens.len()).find(|&j| !tokens[j].is_empty())
}

fn previous_code(tokens: &[Token], i: usize) -> Option<TokenCode> {
    previous_index(tokens, i).map(|j| tokens[j].code)
}

fn next_code(tokens: &[Token], i: usize) -> Option<TokenCode> {
    next_index(tokens, i).map(|j| tokens[j].code)
}
