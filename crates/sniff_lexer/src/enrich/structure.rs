//! Structure-dependent re-classification.
//!
//! These decisions need bracket pairs, so they run after
//! [`brackets`](super::brackets) and before scope mapping:
//!
//! | lexeme | becomes | when |
//! |--------|---------|------|
//! | `[` `]` | `T_OPEN_SHORT_ARRAY` `T_CLOSE_SHORT_ARRAY` | not indexing a value |
//! | `{` `}` | `T_OPEN_USE_GROUP` `T_CLOSE_USE_GROUP` | after `\` |
//! | `=>` | `T_FN_ARROW` | after an arrow function's signature |
//! | `=>` | `T_MATCH_ARROW` | at the top level of a match body |
//! | `default` | `T_MATCH_DEFAULT` | at the top level of a match body |
//! | `case` | `T_ENUM_CASE` | at the top level of an enum body |
//! | `?` | `T_NULLABLE` | in a type position |
//! | `:` | `T_INLINE_ELSE` | the else branch of a ternary |
//! | `\|` `&` | `T_TYPE_UNION` `T_TYPE_INTERSECTION` | in a type declaration |

use sniff_ir::{Token, TokenCode};

use super::{is_closer, next_non_empty, previous_non_empty, skip_group};

pub(super) fn reclassify(tokens: &mut [Token]) {
    short_arrays(tokens);
    use_groups(tokens);
    fn_arrows(tokens);
    match_bodies(tokens);
    enum_cases(tokens);
    nullable(tokens);
    inline_else(tokens);
    type_operators(tokens);
}

fn set_code(tokens: &mut [Token], ptr: usize, code: TokenCode) {
    tracing::trace!(
        ptr,
        from = tokens[ptr].code.name(),
        to = code.name(),
        "restructured"
    );
    tokens[ptr].code = code;
}

// ─── Brackets ──────────────────────────────────────────────────

/// A `[` is an array access when it follows something that yields a value.
fn short_arrays(tokens: &mut [Token]) {
    for open in 0..tokens.len() {
        if tokens[open].code != TokenCode::OpenSquareBracket {
            continue;
        }
        let indexes_value = previous_non_empty(tokens, open).is_some_and(|prev| {
            matches!(
                tokens[prev].code,
                TokenCode::Variable
                    | TokenCode::CloseSquareBracket
                    | TokenCode::CloseShortArray
                    | TokenCode::CloseParenthesis
                    | TokenCode::CloseCurlyBracket
                    | TokenCode::String
                    | TokenCode::ConstantEncapsedString
                    | TokenCode::DoubleQuotedString
            )
        });
        if indexes_value {
            continue;
        }
        set_code(tokens, open, TokenCode::OpenShortArray);
        if let Some(close) = tokens[open].bracket_closer {
            set_code(tokens, close, TokenCode::CloseShortArray);
        }
    }
}

/// `use Foo\{Bar, Baz};`
fn use_groups(tokens: &mut [Token]) {
    for open in 0..tokens.len() {
        if tokens[open].code != TokenCode::OpenCurlyBracket {
            continue;
        }
        let after_separator = previous_non_empty(tokens, open)
            .is_some_and(|prev| tokens[prev].code == TokenCode::NsSeparator);
        if !after_separator {
            continue;
        }
        set_code(tokens, open, TokenCode::OpenUseGroup);
        if let Some(close) = tokens[open].bracket_closer {
            set_code(tokens, close, TokenCode::CloseUseGroup);
        }
    }
}

// ─── Arrows ────────────────────────────────────────────────────

/// The first `=>` after `fn (...)`, past an optional return type.
fn fn_arrows(tokens: &mut [Token]) {
    for fn_ptr in 0..tokens.len() {
        if tokens[fn_ptr].code != TokenCode::Fn {
            continue;
        }
        let Some(close) = tokens[fn_ptr].parenthesis_closer else {
            continue;
        };
        let mut i = close + 1;
        while i < tokens.len() {
            match tokens[i].code {
                TokenCode::DoubleArrow => {
                    set_code(tokens, i, TokenCode::FnArrow);
                    break;
                }
                TokenCode::Semicolon | TokenCode::OpenCurlyBracket | TokenCode::CloseTag => break,
                code if is_closer(code) => break,
                _ => match skip_group(tokens, i) {
                    Some(next) => i = next,
                    None => break,
                },
            }
        }
    }
}

/// `=>` and `default` at the top level of each `match (...) { ... }`.
fn match_bodies(tokens: &mut [Token]) {
    for match_ptr in 0..tokens.len() {
        if tokens[match_ptr].code != TokenCode::Match {
            continue;
        }
        let Some((open, close)) = body_after_parens(tokens, match_ptr) else {
            continue;
        };
        let mut i = open + 1;
        while i < close {
            match tokens[i].code {
                TokenCode::DoubleArrow => set_code(tokens, i, TokenCode::MatchArrow),
                TokenCode::Default => set_code(tokens, i, TokenCode::MatchDefault),
                _ => {}
            }
            i = skip_group(tokens, i).unwrap_or(close);
        }
    }
}

/// The `{ }` pair right after the parenthesis group `owner` owns.
fn body_after_parens(tokens: &[Token], owner: usize) -> Option<(usize, usize)> {
    let parens_close = tokens[owner].parenthesis_closer?;
    let open = next_non_empty(tokens, parens_close)?;
    if tokens[open].code != TokenCode::OpenCurlyBracket {
        return None;
    }
    Some((open, tokens[open].bracket_closer?))
}

/// `case` at the top level of an enum body.
fn enum_cases(tokens: &mut [Token]) {
    for enum_ptr in 0..tokens.len() {
        if tokens[enum_ptr].code != TokenCode::Enum {
            continue;
        }
        let Some(open) = (enum_ptr + 1..tokens.len()).find(|&i| {
            matches!(
                tokens[i].code,
                TokenCode::OpenCurlyBracket | TokenCode::Semicolon
            )
        }) else {
            continue;
        };
        let Some(close) = tokens[open].bracket_closer else {
            continue;
        };
        let mut i = open + 1;
        while i < close {
            if tokens[i].code == TokenCode::Case {
                set_code(tokens, i, TokenCode::EnumCase);
            }
            i = skip_group(tokens, i).unwrap_or(close);
        }
    }
}

// ─── Ternaries & types ─────────────────────────────────────────

/// `?` before a type: after `(`, `,`, `:` (return type), a modifier or an
/// attribute.
fn nullable(tokens: &mut [Token]) {
    for i in 0..tokens.len() {
        if tokens[i].code != TokenCode::InlineThen {
            continue;
        }
        let in_type_position = previous_non_empty(tokens, i).is_some_and(|prev| {
            matches!(
                tokens[prev].code,
                TokenCode::OpenParenthesis
                    | TokenCode::Comma
                    | TokenCode::Colon
                    | TokenCode::Public
                    | TokenCode::Protected
                    | TokenCode::Private
                    | TokenCode::Static
                    | TokenCode::Readonly
                    | TokenCode::Var
                    | TokenCode::Const
                    | TokenCode::AttributeEnd
            )
        });
        if in_type_position {
            set_code(tokens, i, TokenCode::Nullable);
        }
    }
}

/// The `:` that closes each `?`, skipping nested ternaries and groups.
fn inline_else(tokens: &mut [Token]) {
    for then in 0..tokens.len() {
        if tokens[then].code != TokenCode::InlineThen {
            continue;
        }
        let mut nested = 0usize;
        let mut i = then + 1;
        while i < tokens.len() {
            match tokens[i].code {
                TokenCode::InlineThen => nested += 1,
                TokenCode::Colon | TokenCode::InlineElse if nested > 0 => nested -= 1,
                TokenCode::Colon => {
                    set_code(tokens, i, TokenCode::InlineElse);
                    break;
                }
                TokenCode::InlineElse
                | TokenCode::Semicolon
                | TokenCode::Comma
                | TokenCode::CloseTag => break,
                code if is_closer(code) => break,
                _ => {}
            }
            match skip_group(tokens, i) {
                Some(next) => i = next,
                None => break,
            }
        }
    }
}

/// Codes that can start or continue a type name.
fn is_type_name(code: TokenCode) -> bool {
    matches!(
        code,
        TokenCode::String
            | TokenCode::NsSeparator
            | TokenCode::Array
            | TokenCode::Callable
            | TokenCode::SelfKw
            | TokenCode::Parent
            | TokenCode::Static
            | TokenCode::Null
            | TokenCode::False
            | TokenCode::True
            | TokenCode::OpenParenthesis
    )
}

fn is_modifier(code: TokenCode) -> bool {
    matches!(
        code,
        TokenCode::Public
            | TokenCode::Protected
            | TokenCode::Private
            | TokenCode::Static
            | TokenCode::Readonly
            | TokenCode::Var
            | TokenCode::Final
            | TokenCode::Abstract
    )
}

/// Mark `|`/`&` as type operators in parameter lists, return types and
/// property declarations.
fn type_operators(tokens: &mut [Token]) {
    for i in 0..tokens.len() {
        match tokens[i].code {
            TokenCode::Function | TokenCode::Closure | TokenCode::Fn => {
                let (Some(open), Some(close)) =
                    (tokens[i].parenthesis_opener, tokens[i].parenthesis_closer)
                else {
                    continue;
                };
                if tokens[i].parenthesis_owner != Some(i) {
                    continue;
                }
                parameter_types(tokens, open, close);
                return_type(tokens, close);
            }
            code if is_modifier(code) => property_type(tokens, i),
            _ => {}
        }
    }
}

fn parameter_types(tokens: &mut [Token], open: usize, close: usize) {
    let mut in_type = true;
    let mut depth = 0usize;
    let mut i = open + 1;
    while i < close {
        match tokens[i].code {
            TokenCode::Attribute => {
                i = tokens[i].attribute_closer.map_or(close, |c| c + 1);
                continue;
            }
            TokenCode::OpenParenthesis
            | TokenCode::OpenSquareBracket
            | TokenCode::OpenShortArray => depth += 1,
            TokenCode::CloseParenthesis
            | TokenCode::CloseSquareBracket
            | TokenCode::CloseShortArray => depth = depth.saturating_sub(1),
            TokenCode::Comma if depth == 0 => in_type = true,
            TokenCode::Variable | TokenCode::Equal | TokenCode::Ellipsis => in_type = false,
            _ if in_type => mark_type_operator(tokens, i),
            _ => {}
        }
        i += 1;
    }
}

/// `): A|B {` / `): A&B =>`, looking past a closure's `use (...)`.
fn return_type(tokens: &mut [Token], close: usize) {
    let Some(mut colon) = next_non_empty(tokens, close) else {
        return;
    };
    if tokens[colon].code == TokenCode::Use {
        let Some(next) = tokens[colon]
            .parenthesis_closer
            .and_then(|c| next_non_empty(tokens, c))
        else {
            return;
        };
        colon = next;
    }
    if tokens[colon].code != TokenCode::Colon {
        return;
    }
    let mut i = colon;
    while let Some(next) = next_non_empty(tokens, i) {
        match tokens[next].code {
            TokenCode::BitwiseOr | TokenCode::BitwiseAnd => mark_type_operator(tokens, next),
            TokenCode::Nullable | TokenCode::CloseParenthesis => {}
            code if is_type_name(code) => {}
            _ => return,
        }
        i = next;
    }
}

/// `public A|B $x;`: the type between modifiers and the variable.
fn property_type(tokens: &mut [Token], modifier: usize) {
    let mut operators: Vec<usize> = Vec::new();
    let mut i = modifier;
    while let Some(next) = next_non_empty(tokens, i) {
        let code = tokens[next].code;
        match code {
            TokenCode::Variable => {
                for ptr in operators {
                    mark_type_operator(tokens, ptr);
                }
                return;
            }
            TokenCode::BitwiseOr | TokenCode::BitwiseAnd => operators.push(next),
            TokenCode::Nullable | TokenCode::CloseParenthesis => {}
            _ if is_modifier(code) || is_type_name(code) => {}
            _ => return,
        }
        i = next;
    }
}

fn mark_type_operator(tokens: &mut [Token], i: usize) {
    match tokens[i].code {
        TokenCode::BitwiseOr => set_code(tokens, i, TokenCode::TypeUnion),
        TokenCode::BitwiseAnd => {
            let before_type = next_non_empty(tokens, i).is_some_and(|n| is_type_name(tokens[n].code));
            if before_type {
                set_code(tokens, i, TokenCode::TypeIntersection);
            }
        }
        _ => {}
    }
}
