//! Nesting maps, levels and link propagation.
//!
//! One forward sweep with a stack per kind of group. At each token, groups
//! that close here are left first, the token is stamped with what encloses
//! it, then groups that open here are entered. Openers and closers are
//! therefore never inside their own group.

use sniff_ir::{Token, TokenCode};

use super::previous_non_empty;

/// An entered scope.
#[derive(Clone, Copy, Debug)]
struct Scope {
    owner: usize,
    code: TokenCode,
    opener: usize,
    closer: usize,
}

pub(super) fn apply(tokens: &mut [Token]) {
    // Scopes keyed by opener.
    let mut opens: Vec<Option<Scope>> = vec![None; tokens.len()];
    for (ptr, token) in tokens.iter().enumerate() {
        if token.scope_condition != Some(ptr) {
            continue;
        }
        if let (Some(opener), Some(closer)) = (token.scope_opener, token.scope_closer) {
            if opener > ptr && closer > opener {
                opens[opener] = Some(Scope {
                    owner: ptr,
                    code: token.code,
                    opener,
                    closer,
                });
            }
        }
    }

    let mut scopes: Vec<Scope> = Vec::new();
    let mut parens: Vec<(usize, usize)> = Vec::new();
    let mut squares: Vec<(usize, usize)> = Vec::new();
    let mut attributes: Vec<(usize, usize)> = Vec::new();

    for i in 0..tokens.len() {
        while scopes.last().is_some_and(|s| s.closer <= i) {
            scopes.pop();
        }
        while parens.last().is_some_and(|&(_, close)| close <= i) {
            parens.pop();
        }
        while squares.last().is_some_and(|&(_, close)| close <= i) {
            squares.pop();
        }
        // Attribute links cover the delimiters too.
        while attributes.last().is_some_and(|&(_, close)| close < i) {
            attributes.pop();
        }

        let inherited = inherited_group(tokens, &parens);
        let token = &mut tokens[i];

        token.conditions = scopes.iter().map(|s| (s.owner, s.code)).collect();
        token.level = u32::try_from(scopes.len()).unwrap_or(u32::MAX);
        token.nested_parenthesis = parens.iter().copied().collect();

        if let Some((open, close, owner)) = inherited {
            if token.parenthesis_opener.is_none() {
                token.parenthesis_opener = Some(open);
                token.parenthesis_closer = Some(close);
                token.parenthesis_owner = owner;
            }
        }
        if let Some(&(open, close)) = squares.last() {
            if token.bracket_opener.is_none() {
                token.bracket_opener = Some(open);
                token.bracket_closer = Some(close);
            }
        }
        if let Some(scope) = scopes.last() {
            if token.scope_condition.is_none() {
                token.scope_condition = Some(scope.owner);
                token.scope_opener = Some(scope.opener);
                token.scope_closer = Some(scope.closer);
            }
        }
        if let Some(&(open, close)) = attributes.last() {
            if token.attribute_opener.is_none() {
                token.attribute_opener = Some(open);
                token.attribute_closer = Some(close);
            }
        }

        match token.code {
            TokenCode::OpenParenthesis => {
                if let Some(close) = token.parenthesis_closer.filter(|&c| c > i) {
                    parens.push((i, close));
                }
            }
            TokenCode::OpenSquareBracket | TokenCode::OpenShortArray => {
                if let Some(close) = token.bracket_closer.filter(|&c| c > i) {
                    squares.push((i, close));
                }
            }
            TokenCode::Attribute => {
                if let Some(close) = token.attribute_closer.filter(|&c| c > i) {
                    attributes.push((i, close));
                }
            }
            _ => {}
        }

        if let Some(scope) = opens[i] {
            match scopes.last() {
                Some(outer) if scope.closer > outer.closer => {
                    tracing::trace!(owner = scope.owner, "scope crosses its enclosing scope");
                }
                _ => scopes.push(scope),
            }
        }
    }
}

/// The group whose `(opener, closer, owner)` a token inside `parens`
/// inherits.
///
/// Normally the innermost group. An unowned group whose `(` directly follows
/// the enclosing group's `(` defers outward, repeatedly, to the first owned
/// group: `if (($a))` attributes `$a` to the `if` clause. With no owned group
/// on that chain the innermost group is used as is.
fn inherited_group(
    tokens: &[Token],
    parens: &[(usize, usize)],
) -> Option<(usize, usize, Option<usize>)> {
    let &(innermost_open, innermost_close) = parens.last()?;
    for depth in (0..parens.len()).rev() {
        let (open, close) = parens[depth];
        if let Some(owner) = tokens[open].parenthesis_owner {
            return Some((open, close, Some(owner)));
        }
        let consecutive = depth
            .checked_sub(1)
            .is_some_and(|outer| previous_non_empty(tokens, open) == Some(parens[outer].0));
        if !consecutive {
            break;
        }
    }
    Some((innermost_open, innermost_close, None))
}
