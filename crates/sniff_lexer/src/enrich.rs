//! Token-Stream Enricher
//!
//! Turns the lexer's flat primitive tokens into the linked stream rules
//! consume. The passes run strictly in order; each one reads what the
//! earlier ones established:
//!
//! ```text
//! primitive tokens
//!   → emit       merges + doc-comment splice into a fresh output vector
//!   → brackets   ( ) [ ] { } #[ ] pairing, parenthesis owners
//!   → structure  short arrays, use groups, fn/match arrows, nullable,
//!                ternary else, type unions/intersections, enum cases
//!   → scopes     scope owner → opener → closer
//!   → nesting    nested_parenthesis, conditions, level, link propagation
//!   → verify     links in bounds, pairs symmetric, owners consistent
//! ```
//!
//! Stack pointers are final once `emit` has built the output vector; no
//! later pass inserts or removes tokens.
//!
//! Unmatched brackets and unowned scopes are not errors: the links are simply
//! left absent. The only failure is a broken internal guarantee.

mod brackets;
mod emit;
mod nesting;
mod scopes;
mod structure;

use sniff_ir::{Dialect, Token, TokenCode};

use crate::TokenizerError;

/// Enriches primitive token streams under one dialect.
pub struct Enricher<'d> {
    dialect: &'d Dialect,
    tab_width: u32,
}

impl<'d> Enricher<'d> {
    pub fn new(dialect: &'d Dialect, tab_width: u32) -> Self {
        Enricher { dialect, tab_width }
    }

    /// Run every pass over `primitive` and return the linked stream.
    #[tracing::instrument(level = "debug", skip_all, fields(tokens = primitive.len()))]
    pub fn enrich(&self, primitive: Vec<Token>) -> Result<Vec<Token>, TokenizerError> {
        let mut tokens = emit::emit(primitive, self.tab_width)?;
        brackets::link(&mut tokens);
        brackets::assign_parenthesis_owners(&mut tokens, self.dialect);
        structure::reclassify(&mut tokens);
        scopes::map(&mut tokens, self.dialect);
        nesting::apply(&mut tokens);
        verify_links(&tokens)?;
        Ok(tokens)
    }
}

// ─── Shared cursor helpers ─────────────────────────────────────

/// Next non-empty token after `i`.
pub(crate) fn next_non_empty(tokens: &[Token], i: usize) -> Option<usize> {
    (i + 1..tokens.len()).find(|&j| !tokens[j].is_empty())
}

/// Previous non-empty token before `i`.
pub(crate) fn previous_non_empty(tokens: &[Token], i: usize) -> Option<usize> {
    (0..i.min(tokens.len())).rev().find(|&j| !tokens[j].is_empty())
}

/// Where a forward scan continues after looking at `i`: past the group `i`
/// opens, or to the next token. `None` when `i` opens a group that never
/// closes.
pub(crate) fn skip_group(tokens: &[Token], i: usize) -> Option<usize> {
    let token = &tokens[i];
    let closer = match token.code {
        TokenCode::OpenParenthesis => token.parenthesis_closer,
        TokenCode::OpenSquareBracket
        | TokenCode::OpenShortArray
        | TokenCode::OpenCurlyBracket
        | TokenCode::OpenUseGroup => token.bracket_closer,
        TokenCode::Attribute => token.attribute_closer,
        _ => return Some(i + 1),
    };
    closer.map(|c| c + 1)
}

/// Closing delimiters that end a forward scan when met outside any group
/// the scan itself opened.
pub(crate) fn is_closer(code: TokenCode) -> bool {
    matches!(
        code,
        TokenCode::CloseParenthesis
            | TokenCode::CloseSquareBracket
            | TokenCode::CloseShortArray
            | TokenCode::CloseCurlyBracket
            | TokenCode::CloseUseGroup
            | TokenCode::AttributeEnd
    )
}

// ─── Verification ──────────────────────────────────────────────

/// `(opener, closer)` as one token records it.
type Pair = (Option<usize>, Option<usize>);

fn parenthesis_pair(token: &Token) -> Pair {
    (token.parenthesis_opener, token.parenthesis_closer)
}

fn bracket_pair(token: &Token) -> Pair {
    (token.bracket_opener, token.bracket_closer)
}

fn attribute_pair(token: &Token) -> Pair {
    (token.attribute_opener, token.attribute_closer)
}

fn scope_pair(token: &Token) -> Pair {
    (token.scope_opener, token.scope_closer)
}

/// Check the guarantees every later consumer relies on:
///
/// - every link points into the stream
/// - a complete pair agrees with what its opener and closer record
/// - an owner records the same pair as the tokens it owns
fn verify_links(tokens: &[Token]) -> Result<(), TokenizerError> {
    verify_bounds(tokens)?;

    let pairs: [(&str, fn(&Token) -> Pair); 3] = [
        ("parenthesis", parenthesis_pair),
        ("bracket", bracket_pair),
        ("attribute", attribute_pair),
    ];
    for (ptr, token) in tokens.iter().enumerate() {
        for (kind, pair) in pairs {
            let (Some(opener), Some(closer)) = pair(token) else {
                continue;
            };
            if pair(&tokens[opener]).1 != Some(closer) || pair(&tokens[closer]).0 != Some(opener) {
                return Err(TokenizerError::invariant(format!(
                    "token {ptr} has {kind} pair {opener}..{closer}, which its ends do not share"
                )));
            }
        }

        let owned: [(&str, Option<usize>, fn(&Token) -> Pair); 2] = [
            ("parenthesis", token.parenthesis_owner, parenthesis_pair),
            ("scope", token.scope_condition, scope_pair),
        ];
        for (kind, owner, pair) in owned {
            let Some(owner) = owner else {
                continue;
            };
            if pair(&tokens[owner]) != pair(token) {
                return Err(TokenizerError::invariant(format!(
                    "token {ptr} and its {kind} owner {owner} disagree on the {kind} pair"
                )));
            }
        }
    }
    Ok(())
}

fn verify_bounds(tokens: &[Token]) -> Result<(), TokenizerError> {
    let len = tokens.len();
    for (ptr, token) in tokens.iter().enumerate() {
        let links = [
            token.parenthesis_opener,
            token.parenthesis_closer,
            token.parenthesis_owner,
            token.bracket_opener,
            token.bracket_closer,
            token.scope_condition,
            token.scope_opener,
            token.scope_closer,
            token.comment_opener,
            token.comment_closer,
            token.attribute_opener,
            token.attribute_closer,
        ];
        let nested = token
            .nested_parenthesis
            .iter()
            .flat_map(|&(opener, closer)| [opener, closer]);
        let conditions = token.conditions.iter().map(|&(condition, _)| condition);
        let out_of_bounds = links
            .into_iter()
            .flatten()
            .chain(token.comment_tags.iter().copied())
            .chain(nested)
            .chain(conditions)
            .find(|&link| link >= len);
        if let Some(link) = out_of_bounds {
            return Err(TokenizerError::invariant(format!(
                "token {ptr} links to {link}, past the end of a {len}-token stream"
            )));
        }
    }
    Ok(())
}
