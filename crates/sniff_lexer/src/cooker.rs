//! Token cooking layer.
//!
//! Transforms `(RawTag, text)` pairs from the raw scanner into
//! [`TokenCode`] values.
//!
//! ```text
//! source → RawScanner → (RawTag, len) → TokenCooker → TokenCode
//! ```
//!
//! Each `RawTag` category has a dedicated cooking path:
//! - **Operators/delimiters**: direct 1:1 mapping
//! - **Identifiers**: keyword lookup through the [`ResolveCache`]
//! - **Integers**: overflow check (`T_LNUMBER` vs `T_DNUMBER`)
//! - **Double-quoted strings**: interpolation check
//! - **Degraded input**: best-effort codes, never an error

use std::num::IntErrorKind;

use sniff_ir::TokenCode;
use sniff_lexer_core::RawTag;

use crate::ResolveCache;

/// Cooks raw tags into token codes.
pub(crate) struct TokenCooker<'c> {
    cache: &'c mut ResolveCache,
}

impl<'c> TokenCooker<'c> {
    pub(crate) fn new(cache: &'c mut ResolveCache) -> Self {
        TokenCooker { cache }
    }

    /// Cook one raw token whose source text is `text`.
    pub(crate) fn cook(&mut self, tag: RawTag, text: &str) -> TokenCode {
        match tag {
            // Words & literals
            RawTag::Ident => self.cache.resolve(text),
            RawTag::Variable => TokenCode::Variable,
            RawTag::Int => cook_int(text),
            RawTag::Float => TokenCode::DNumber,
            RawTag::SingleQuoted => TokenCode::ConstantEncapsedString,
            RawTag::DoubleQuoted => {
                if has_interpolation(text) {
                    TokenCode::DoubleQuotedString
                } else {
                    TokenCode::ConstantEncapsedString
                }
            }
            RawTag::Backtick => TokenCode::Backtick,

            // Markup, tags, heredocs
            RawTag::InlineHtml | RawTag::ByteOrderMark | RawTag::Shebang => TokenCode::InlineHtml,
            RawTag::OpenTag => TokenCode::OpenTag,
            RawTag::OpenTagWithEcho => TokenCode::OpenTagWithEcho,
            RawTag::CloseTag => TokenCode::CloseTag,
            RawTag::StartHeredoc => TokenCode::StartHeredoc,
            RawTag::StartNowdoc => TokenCode::StartNowdoc,
            RawTag::HeredocBody => TokenCode::Heredoc,
            RawTag::NowdocBody => TokenCode::Nowdoc,
            RawTag::EndHeredoc => TokenCode::EndHeredoc,
            RawTag::EndNowdoc => TokenCode::EndNowdoc,

            // Single-char operators
            RawTag::Plus => TokenCode::Plus,
            RawTag::Minus => TokenCode::Minus,
            RawTag::Star => TokenCode::Multiply,
            RawTag::Slash => TokenCode::Divide,
            RawTag::Percent => TokenCode::Modulus,
            RawTag::Caret => TokenCode::BitwiseXor,
            RawTag::Ampersand => TokenCode::BitwiseAnd,
            RawTag::Pipe => TokenCode::BitwiseOr,
            RawTag::Tilde => TokenCode::BitwiseNot,
            RawTag::Bang => TokenCode::BooleanNot,
            RawTag::Equal => TokenCode::Equal,
            RawTag::Less => TokenCode::LessThan,
            RawTag::Greater => TokenCode::GreaterThan,
            RawTag::Dot => TokenCode::StringConcat,
            // Settled by the enricher: nullable type or ternary.
            RawTag::Question => TokenCode::InlineThen,
            RawTag::Colon => TokenCode::Colon,
            RawTag::At => TokenCode::Asperand,
            RawTag::Dollar => TokenCode::Dollar,
            RawTag::Backslash => TokenCode::NsSeparator,

            // Compound operators
            RawTag::PlusPlus => TokenCode::Inc,
            RawTag::MinusMinus => TokenCode::Dec,
            RawTag::PlusEqual => TokenCode::PlusEqual,
            RawTag::MinusEqual => TokenCode::MinusEqual,
            RawTag::StarEqual => TokenCode::MulEqual,
            RawTag::SlashEqual => TokenCode::DivEqual,
            RawTag::PercentEqual => TokenCode::ModEqual,
            RawTag::CaretEqual => TokenCode::XorEqual,
            RawTag::AmpersandEqual => TokenCode::AndEqual,
            RawTag::PipeEqual => TokenCode::OrEqual,
            RawTag::DotEqual => TokenCode::ConcatEqual,
            RawTag::StarStar => TokenCode::Pow,
            RawTag::StarStarEqual => TokenCode::PowEqual,
            RawTag::Shl => TokenCode::Sl,
            RawTag::Shr => TokenCode::Sr,
            RawTag::ShlEqual => TokenCode::SlEqual,
            RawTag::ShrEqual => TokenCode::SrEqual,
            RawTag::EqualEqual => TokenCode::IsEqual,
            RawTag::EqualEqualEqual => TokenCode::IsIdentical,
            RawTag::BangEqual | RawTag::LessGreater => TokenCode::IsNotEqual,
            RawTag::BangEqualEqual => TokenCode::IsNotIdentical,
            RawTag::LessEqual => TokenCode::IsSmallerOrEqual,
            RawTag::GreaterEqual => TokenCode::IsGreaterOrEqual,
            RawTag::Spaceship => TokenCode::Spaceship,
            RawTag::AmpersandAmpersand => TokenCode::BooleanAnd,
            RawTag::PipePipe => TokenCode::BooleanOr,
            RawTag::QuestionQuestion => TokenCode::Coalesce,
            RawTag::Arrow => TokenCode::ObjectOperator,

            // Delimiters
            RawTag::LeftParen => TokenCode::OpenParenthesis,
            RawTag::RightParen => TokenCode::CloseParenthesis,
            RawTag::LeftBracket => TokenCode::OpenSquareBracket,
            RawTag::RightBracket => TokenCode::CloseSquareBracket,
            RawTag::LeftBrace => TokenCode::OpenCurlyBracket,
            RawTag::RightBrace => TokenCode::CloseCurlyBracket,
            RawTag::Comma => TokenCode::Comma,
            RawTag::Semicolon => TokenCode::Semicolon,
            RawTag::ColonColon => TokenCode::DoubleColon,
            RawTag::DoubleArrow => TokenCode::DoubleArrow,
            RawTag::Ellipsis => TokenCode::Ellipsis,
            RawTag::HashBracket => TokenCode::Attribute,

            // Trivia: doc comments stay whole until the enricher splits them.
            RawTag::Whitespace => TokenCode::Whitespace,
            RawTag::LineComment | RawTag::BlockComment | RawTag::DocComment => TokenCode::Comment,

            // Degraded input
            RawTag::UnterminatedString => TokenCode::EncapsedAndWhitespace,
            _ => TokenCode::BadCharacter,
        }
    }
}

/// `T_LNUMBER` unless the literal overflows a signed 64-bit integer, in
/// which case PHP silently promotes it to `T_DNUMBER`.
fn cook_int(text: &str) -> TokenCode {
    let digits: String = text.chars().filter(|&c| c != '_').collect();
    let (radix, body) = match digits.as_bytes() {
        [b'0', b'x' | b'X', ..] => (16, &digits[2..]),
        [b'0', b'b' | b'B', ..] => (2, &digits[2..]),
        [b'0', b'o' | b'O', ..] => (8, &digits[2..]),
        [b'0', _, ..] => (8, &digits[1..]),
        _ => (10, digits.as_str()),
    };
    match i64::from_str_radix(body, radix) {
        Err(err) if *err.kind() == IntErrorKind::PosOverflow => TokenCode::DNumber,
        _ => TokenCode::LNumber,
    }
}

/// Returns `true` if a double-quoted string embeds variables or
/// expressions (`$name`, `{$...}`, `${...}`).
pub(crate) fn has_interpolation(text: &str) -> bool {
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'$' => match bytes.get(i + 1) {
                Some(&b) if b == b'{' || b == b'_' || b.is_ascii_alphabetic() || b >= 0x80 => {
                    return true;
                }
                _ => i += 1,
            },
            b'{' if bytes.get(i + 1) == Some(&b'$') => return true,
            _ => i += 1,
        }
    }
    false
}
