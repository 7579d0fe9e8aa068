//! Hand-written raw scanner producing `(RawTag, len)` pairs.
//!
//! The scanner operates on a sentinel-terminated [`Cursor`] and produces
//! [`RawToken`] values without heap allocation. It does not resolve
//! keywords, split lines, or compute positions; those are deferred to the
//! cooking layer in `sniff_lexer`.
//!
//! # Modes
//!
//! The input is a superset grammar: markup with embedded code regions.
//! The scanner is a small state machine:
//!
//! - **Markup**: everything up to the next open tag is one `InlineHtml`
//!   token. A byte-order mark and a `#!` line at the very start of the file
//!   get dedicated tags.
//! - **Code**: the regular token grammar, until `?>`.
//! - **Heredoc**: after `<<<ID`, one body token, then the closing marker.
//! - **Halted**: after `__halt_compiler();` the rest of the file is data.
//!
//! # Degraded input
//!
//! Unterminated strings and comments run to end of input. Bytes that start
//! no token produce `Unknown`. Scanning never fails.

use crate::cursor::{is_php_whitespace, Cursor};
use crate::tag::{RawTag, RawToken};

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Maximum nesting of strings inside `{$...}` interpolations that the
/// scanner follows. Deeper quotes are treated as plain bytes.
const MAX_INTERPOLATION_DEPTH: u32 = 32;

/// Scanner options that change how markup is split.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScanOptions {
    /// Recognise `<?` (without `php`) as an open tag.
    pub short_open_tag: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            short_open_tag: true,
        }
    }
}

/// What the scanner is currently looking at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    /// Raw markup outside of code regions.
    Markup,
    /// Code between an open tag and `?>`.
    Code,
    /// Inside a heredoc or nowdoc. The label lives at
    /// `label_start..label_start + label_len` in the source.
    Heredoc {
        label_start: u32,
        label_len: u32,
        nowdoc: bool,
        body_done: bool,
    },
    /// After `__halt_compiler();`.
    Halted,
}

/// Progress through the leading bytes of a file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Leading {
    /// Nothing consumed yet: a byte-order mark may follow.
    Bom,
    /// A `#!` line may follow.
    Shebang,
    /// Past the file header.
    Done,
}

/// Pure, allocation-free scanner.
///
/// Produces one token at a time as a `(tag, length)` pair.
/// Error conditions are encoded as `RawTag` variants, not as `Result::Err`.
pub struct RawScanner<'a> {
    cursor: Cursor<'a>,
    options: ScanOptions,
    mode: Mode,
    leading: Leading,
    /// Significant tokens still expected after `__halt_compiler` before the
    /// rest of the file becomes data (`(`, `)`, `;`).
    halt_remaining: Option<u8>,
}

impl<'a> RawScanner<'a> {
    /// Create a new scanner with default options.
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self::with_options(cursor, ScanOptions::default())
    }

    /// Create a new scanner with explicit options.
    pub fn with_options(cursor: Cursor<'a>, options: ScanOptions) -> Self {
        Self {
            cursor,
            options,
            mode: Mode::Markup,
            leading: Leading::Bom,
            halt_remaining: None,
        }
    }

    /// Produce the next raw token.
    ///
    /// Returns `RawTag::Eof` with `len == 0` when the source is exhausted.
    /// Subsequent calls after EOF continue to return `Eof`.
    pub fn next_token(&mut self) -> RawToken {
        let start = self.cursor.pos();
        if self.cursor.is_eof() {
            return RawToken {
                tag: RawTag::Eof,
                len: 0,
            };
        }
        match self.mode {
            Mode::Markup => self.markup(start),
            Mode::Code => {
                let token = self.code(start);
                self.track_halt(start, token);
                token
            }
            Mode::Heredoc {
                label_start,
                label_len,
                nowdoc,
                body_done,
            } => self.heredoc(start, label_start, label_len, nowdoc, body_done),
            Mode::Halted => {
                self.cursor.advance_n(self.cursor.source_len() - start);
                self.token(start, RawTag::InlineHtml)
            }
        }
    }

    #[inline]
    fn token(&self, start: u32, tag: RawTag) -> RawToken {
        RawToken {
            tag,
            len: self.cursor.pos() - start,
        }
    }

    /// Consume `n` bytes and produce a token with `tag`.
    #[inline]
    fn fixed(&mut self, start: u32, n: u32, tag: RawTag) -> RawToken {
        self.cursor.advance_n(n);
        self.token(start, tag)
    }

    // ─── Markup ────────────────────────────────────────────────────

    fn markup(&mut self, start: u32) -> RawToken {
        match self.leading {
            Leading::Bom => {
                self.leading = Leading::Shebang;
                if self.cursor.starts_with(UTF8_BOM) {
                    return self.fixed(start, 3, RawTag::ByteOrderMark);
                }
                return self.markup(start);
            }
            Leading::Shebang => {
                self.leading = Leading::Done;
                if self.cursor.starts_with(b"#!") {
                    self.cursor.eat_line();
                    return self.token(start, RawTag::Shebang);
                }
            }
            Leading::Done => {}
        }

        if let Some((tag, len)) = self.open_tag_here() {
            self.mode = Mode::Code;
            return self.fixed(start, len, tag);
        }

        loop {
            self.cursor.advance();
            if !self.cursor.eat_until(b'<') || self.open_tag_here().is_some() {
                break;
            }
        }
        self.token(start, RawTag::InlineHtml)
    }

    /// Recognise an open tag at the cursor, returning its tag and length.
    ///
    /// `<?php` must be followed by whitespace or end of input and absorbs a
    /// single blank or line break. `<?=` and the short `<?` absorb nothing.
    fn open_tag_here(&self) -> Option<(RawTag, u32)> {
        if !self.cursor.starts_with(b"<?") {
            return None;
        }
        if self.cursor.starts_with_ignore_case(b"<?php") {
            let after = self.cursor.peek_at(5);
            let at_end = self.cursor.pos() + 5 == self.cursor.source_len();
            if at_end {
                return Some((RawTag::OpenTag, 5));
            }
            if is_php_whitespace(after) {
                let absorbed = if after == b'\r' && self.cursor.peek_at(6) == b'\n' {
                    2
                } else {
                    1
                };
                return Some((RawTag::OpenTag, 5 + absorbed));
            }
        }
        if self.cursor.peek2() == b'=' {
            return Some((RawTag::OpenTagWithEcho, 3));
        }
        if self.options.short_open_tag {
            return Some((RawTag::OpenTag, 2));
        }
        None
    }

    // ─── Code ──────────────────────────────────────────────────────

    fn code(&mut self, start: u32) -> RawToken {
        match self.cursor.current() {
            0 => self.fixed(start, 1, RawTag::InteriorNull),
            b' ' | b'\t' | b'\r' | b'\n' => {
                self.cursor.eat_whitespace();
                self.token(start, RawTag::Whitespace)
            }
            b'a'..=b'z' | b'A'..=b'Z' | b'_' | 0x80..=0xFF => self.identifier(start),
            b'$' => self.dollar(start),
            b'0'..=b'9' => self.number(start),
            b'\'' => self.single_quoted(start),
            b'"' => self.interpolated(start, b'"', RawTag::DoubleQuoted),
            b'`' => self.interpolated(start, b'`', RawTag::Backtick),
            b'/' => self.slash(start),
            b'#' => self.hash(start),
            b'.' => self.dot(start),
            b'?' => self.question(start),
            b'<' => self.less(start),
            b'>' => self.greater(start),
            b'=' => self.equal(start),
            b'!' => self.bang(start),
            b'+' => self.plus(start),
            b'-' => self.minus(start),
            b'*' => self.star(start),
            b'&' => self.doubled_or_assign(
                start,
                RawTag::Ampersand,
                RawTag::AmpersandAmpersand,
                RawTag::AmpersandEqual,
            ),
            b'|' => self.doubled_or_assign(start, RawTag::Pipe, RawTag::PipePipe, RawTag::PipeEqual),
            b'%' => self.with_assign(start, RawTag::Percent, RawTag::PercentEqual),
            b'^' => self.with_assign(start, RawTag::Caret, RawTag::CaretEqual),
            b':' => {
                if self.cursor.peek() == b':' {
                    self.fixed(start, 2, RawTag::ColonColon)
                } else {
                    self.fixed(start, 1, RawTag::Colon)
                }
            }
            b'~' => self.fixed(start, 1, RawTag::Tilde),
            b'@' => self.fixed(start, 1, RawTag::At),
            b'\\' => self.fixed(start, 1, RawTag::Backslash),
            b'(' => self.fixed(start, 1, RawTag::LeftParen),
            b')' => self.fixed(start, 1, RawTag::RightParen),
            b'[' => self.fixed(start, 1, RawTag::LeftBracket),
            b']' => self.fixed(start, 1, RawTag::RightBracket),
            b'{' => self.fixed(start, 1, RawTag::LeftBrace),
            b'}' => self.fixed(start, 1, RawTag::RightBrace),
            b',' => self.fixed(start, 1, RawTag::Comma),
            b';' => self.fixed(start, 1, RawTag::Semicolon),
            // Remaining control characters and DEL.
            1..=8 | 11..=12 | 14..=31 | 127 => self.fixed(start, 1, RawTag::Unknown),
        }
    }

    /// Switch to halted mode once `__halt_compiler ( ) ;` has been seen.
    fn track_halt(&mut self, start: u32, token: RawToken) {
        if token.tag.is_trivia() {
            return;
        }
        if token.tag == RawTag::Ident {
            let text = self.cursor.slice(start, start + token.len);
            if text.eq_ignore_ascii_case("__halt_compiler") {
                self.halt_remaining = Some(3);
                return;
            }
        }
        if let Some(remaining) = self.halt_remaining {
            let remaining = remaining.saturating_sub(1);
            if remaining == 0 || token.tag == RawTag::CloseTag {
                self.halt_remaining = None;
                self.mode = Mode::Halted;
            } else {
                self.halt_remaining = Some(remaining);
            }
        }
    }

    fn identifier(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        self.cursor.eat_while(is_label_continue);
        self.token(start, RawTag::Ident)
    }

    fn dollar(&mut self, start: u32) -> RawToken {
        if is_label_start(self.cursor.peek()) {
            self.cursor.advance();
            self.cursor.eat_while(is_label_continue);
            self.token(start, RawTag::Variable)
        } else {
            self.fixed(start, 1, RawTag::Dollar)
        }
    }

    // ─── Numbers ───────────────────────────────────────────────────

    fn number(&mut self, start: u32) -> RawToken {
        if self.cursor.current() == b'0' {
            let radix_digit: Option<fn(u8) -> bool> = match self.cursor.peek() {
                b'x' | b'X' => Some(is_hex_digit),
                b'b' | b'B' => Some(is_binary_digit),
                b'o' | b'O' => Some(is_octal_digit),
                _ => None,
            };
            if let Some(is_digit) = radix_digit {
                if is_digit(self.cursor.peek2()) {
                    self.cursor.advance_n(2);
                    self.eat_digits(is_digit);
                    return self.token(start, RawTag::Int);
                }
            }
        }

        self.eat_digits(|b| b.is_ascii_digit());
        let mut is_float = false;
        let ellipsis = self.cursor.peek() == b'.' && self.cursor.peek2() == b'.';
        if self.cursor.current() == b'.' && !ellipsis {
            is_float = true;
            self.cursor.advance();
            self.eat_digits(|b| b.is_ascii_digit());
        }
        if self.eat_exponent() {
            is_float = true;
        }
        self.token(start, if is_float { RawTag::Float } else { RawTag::Int })
    }

    /// Eat digits accepted by `is_digit`, with single `_` separators between
    /// digits.
    fn eat_digits(&mut self, is_digit: impl Fn(u8) -> bool) {
        loop {
            let b = self.cursor.current();
            if is_digit(b) && !self.cursor.is_eof() {
                self.cursor.advance();
            } else if b == b'_' && is_digit(self.cursor.peek()) {
                self.cursor.advance();
            } else {
                break;
            }
        }
    }

    /// Eat an exponent suffix (`e5`, `E-3`, `e+10`) if one follows.
    fn eat_exponent(&mut self) -> bool {
        if !matches!(self.cursor.current(), b'e' | b'E') {
            return false;
        }
        let sign = matches!(self.cursor.peek(), b'+' | b'-');
        let digit = if sign {
            self.cursor.peek2()
        } else {
            self.cursor.peek()
        };
        if !digit.is_ascii_digit() {
            return false;
        }
        self.cursor.advance_n(if sign { 2 } else { 1 });
        self.eat_digits(|b| b.is_ascii_digit());
        true
    }

    // ─── Strings ───────────────────────────────────────────────────

    fn single_quoted(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        if self.skip_single_quoted_body() {
            self.token(start, RawTag::SingleQuoted)
        } else {
            self.token(start, RawTag::UnterminatedString)
        }
    }

    /// Skip to just past the closing `'`. Returns `false` at end of input.
    fn skip_single_quoted_body(&mut self) -> bool {
        loop {
            match self.cursor.skip_to_any2(b'\'', b'\\') {
                b'\'' => {
                    self.cursor.advance();
                    return true;
                }
                b'\\' => self.cursor.advance_n(2),
                _ => return false,
            }
        }
    }

    fn interpolated(&mut self, start: u32, quote: u8, tag: RawTag) -> RawToken {
        self.cursor.advance();
        if self.skip_interpolated_body(quote, 0) {
            self.token(start, tag)
        } else {
            self.token(start, RawTag::UnterminatedString)
        }
    }

    /// Skip to just past the closing `quote`, stepping over escapes and
    /// `{$...}` / `${...}` interpolations (which may contain quotes of
    /// their own). Returns `false` at end of input.
    fn skip_interpolated_body(&mut self, quote: u8, depth: u32) -> bool {
        loop {
            let b = self.cursor.current();
            if self.cursor.is_eof() {
                return false;
            }
            if b == quote {
                self.cursor.advance();
                return true;
            }
            match b {
                b'\\' => self.cursor.advance_n(2),
                b'{' if self.cursor.peek() == b'$' => self.skip_braced(depth),
                b'$' if self.cursor.peek() == b'{' => {
                    self.cursor.advance();
                    self.skip_braced(depth);
                }
                _ => self.cursor.advance(),
            }
        }
    }

    /// Skip a `{...}` group inside an interpolated string, cursor at `{`.
    fn skip_braced(&mut self, depth: u32) {
        let mut braces = 0u32;
        while !self.cursor.is_eof() {
            match self.cursor.current() {
                b'{' => {
                    braces += 1;
                    self.cursor.advance();
                }
                b'}' => {
                    self.cursor.advance();
                    braces = braces.saturating_sub(1);
                    if braces == 0 {
                        return;
                    }
                }
                b'\'' if depth < MAX_INTERPOLATION_DEPTH => {
                    self.cursor.advance();
                    self.skip_single_quoted_body();
                }
                q @ (b'"' | b'`') if depth < MAX_INTERPOLATION_DEPTH => {
                    self.cursor.advance();
                    self.skip_interpolated_body(q, depth + 1);
                }
                _ => self.cursor.advance(),
            }
        }
    }

    // ─── Heredoc / Nowdoc ──────────────────────────────────────────

    /// Try to scan `<<<ID`, `<<<"ID"` or `<<<'ID'` plus its line break.
    fn heredoc_start(&mut self, start: u32) -> Option<RawToken> {
        let mut ahead = self.cursor;
        ahead.advance_n(3);
        ahead.eat_blanks();
        let quote = match ahead.current() {
            q @ (b'\'' | b'"') => {
                ahead.advance();
                Some(q)
            }
            _ => None,
        };
        if !is_label_start(ahead.current()) {
            return None;
        }
        let label_start = ahead.pos();
        ahead.advance();
        ahead.eat_while(is_label_continue);
        let label_len = ahead.pos() - label_start;
        if let Some(q) = quote {
            if ahead.current() != q {
                return None;
            }
            ahead.advance();
        }
        if !ahead.eat_line_break() {
            return None;
        }

        let nowdoc = quote == Some(b'\'');
        self.cursor = ahead;
        self.mode = Mode::Heredoc {
            label_start,
            label_len,
            nowdoc,
            body_done: false,
        };
        Some(self.token(
            start,
            if nowdoc {
                RawTag::StartNowdoc
            } else {
                RawTag::StartHeredoc
            },
        ))
    }

    fn heredoc(
        &mut self,
        start: u32,
        label_start: u32,
        label_len: u32,
        nowdoc: bool,
        body_done: bool,
    ) -> RawToken {
        let label = self
            .cursor
            .slice(label_start, label_start + label_len)
            .as_bytes();

        if body_done || closing_marker_len(self.cursor, label).is_some() {
            let len = closing_marker_len(self.cursor, label).unwrap_or(0);
            self.mode = Mode::Code;
            if len == 0 {
                // Closing marker vanished (only at end of input); resume code.
                return self.code(start);
            }
            return self.fixed(
                start,
                len,
                if nowdoc {
                    RawTag::EndNowdoc
                } else {
                    RawTag::EndHeredoc
                },
            );
        }

        loop {
            self.cursor.eat_line();
            if self.cursor.is_eof() {
                self.mode = Mode::Code;
                break;
            }
            if closing_marker_len(self.cursor, label).is_some() {
                self.mode = Mode::Heredoc {
                    label_start,
                    label_len,
                    nowdoc,
                    body_done: true,
                };
                break;
            }
        }
        self.token(
            start,
            if nowdoc {
                RawTag::NowdocBody
            } else {
                RawTag::HeredocBody
            },
        )
    }

    // ─── Comments & slash ──────────────────────────────────────────

    fn slash(&mut self, start: u32) -> RawToken {
        match self.cursor.peek() {
            b'/' => {
                self.cursor.advance_n(2);
                self.line_comment_body();
                self.token(start, RawTag::LineComment)
            }
            b'*' => {
                let doc = self.cursor.peek2() == b'*' && is_php_whitespace(self.cursor.peek_at(3));
                self.cursor.advance_n(2);
                self.cursor.eat_past(b"*/");
                self.token(
                    start,
                    if doc {
                        RawTag::DocComment
                    } else {
                        RawTag::BlockComment
                    },
                )
            }
            _ => self.with_assign(start, RawTag::Slash, RawTag::SlashEqual),
        }
    }

    fn hash(&mut self, start: u32) -> RawToken {
        if self.cursor.peek() == b'[' {
            return self.fixed(start, 2, RawTag::HashBracket);
        }
        self.cursor.advance();
        self.line_comment_body();
        self.token(start, RawTag::LineComment)
    }

    /// Consume a line comment body up to and including its line break,
    /// stopping before a `?>` close tag.
    fn line_comment_body(&mut self) {
        loop {
            match self.cursor.skip_to_any3(b'\n', b'\r', b'?') {
                b'?' => {
                    if self.cursor.peek() == b'>' {
                        return;
                    }
                    self.cursor.advance();
                }
                b'\n' | b'\r' => {
                    self.cursor.eat_line_break();
                    return;
                }
                _ => return,
            }
        }
    }

    // ─── Operators ─────────────────────────────────────────────────

    fn dot(&mut self, start: u32) -> RawToken {
        match self.cursor.peek() {
            b'0'..=b'9' => {
                self.cursor.advance();
                self.eat_digits(|b| b.is_ascii_digit());
                self.eat_exponent();
                self.token(start, RawTag::Float)
            }
            b'.' if self.cursor.peek2() == b'.' => self.fixed(start, 3, RawTag::Ellipsis),
            b'=' => self.fixed(start, 2, RawTag::DotEqual),
            _ => self.fixed(start, 1, RawTag::Dot),
        }
    }

    fn question(&mut self, start: u32) -> RawToken {
        match self.cursor.peek() {
            b'>' => {
                self.cursor.advance_n(2);
                self.cursor.eat_line_break();
                self.mode = Mode::Markup;
                self.token(start, RawTag::CloseTag)
            }
            b'?' => self.fixed(start, 2, RawTag::QuestionQuestion),
            _ => self.fixed(start, 1, RawTag::Question),
        }
    }

    fn less(&mut self, start: u32) -> RawToken {
        match (self.cursor.peek(), self.cursor.peek2()) {
            (b'<', b'<') => match self.heredoc_start(start) {
                Some(token) => token,
                None => self.fixed(start, 2, RawTag::Shl),
            },
            (b'<', b'=') => self.fixed(start, 3, RawTag::ShlEqual),
            (b'<', _) => self.fixed(start, 2, RawTag::Shl),
            (b'=', b'>') => self.fixed(start, 3, RawTag::Spaceship),
            (b'=', _) => self.fixed(start, 2, RawTag::LessEqual),
            (b'>', _) => self.fixed(start, 2, RawTag::LessGreater),
            _ => self.fixed(start, 1, RawTag::Less),
        }
    }

    fn greater(&mut self, start: u32) -> RawToken {
        match (self.cursor.peek(), self.cursor.peek2()) {
            (b'>', b'=') => self.fixed(start, 3, RawTag::ShrEqual),
            (b'>', _) => self.fixed(start, 2, RawTag::Shr),
            (b'=', _) => self.fixed(start, 2, RawTag::GreaterEqual),
            _ => self.fixed(start, 1, RawTag::Greater),
        }
    }

    fn equal(&mut self, start: u32) -> RawToken {
        match (self.cursor.peek(), self.cursor.peek2()) {
            (b'=', b'=') => self.fixed(start, 3, RawTag::EqualEqualEqual),
            (b'=', _) => self.fixed(start, 2, RawTag::EqualEqual),
            (b'>', _) => self.fixed(start, 2, RawTag::DoubleArrow),
            _ => self.fixed(start, 1, RawTag::Equal),
        }
    }

    fn bang(&mut self, start: u32) -> RawToken {
        match (self.cursor.peek(), self.cursor.peek2()) {
            (b'=', b'=') => self.fixed(start, 3, RawTag::BangEqualEqual),
            (b'=', _) => self.fixed(start, 2, RawTag::BangEqual),
            _ => self.fixed(start, 1, RawTag::Bang),
        }
    }

    fn plus(&mut self, start: u32) -> RawToken {
        match self.cursor.peek() {
            b'+' => self.fixed(start, 2, RawTag::PlusPlus),
            b'=' => self.fixed(start, 2, RawTag::PlusEqual),
            _ => self.fixed(start, 1, RawTag::Plus),
        }
    }

    fn minus(&mut self, start: u32) -> RawToken {
        match self.cursor.peek() {
            b'-' => self.fixed(start, 2, RawTag::MinusMinus),
            b'=' => self.fixed(start, 2, RawTag::MinusEqual),
            b'>' => self.fixed(start, 2, RawTag::Arrow),
            _ => self.fixed(start, 1, RawTag::Minus),
        }
    }

    fn star(&mut self, start: u32) -> RawToken {
        match (self.cursor.peek(), self.cursor.peek2()) {
            (b'*', b'=') => self.fixed(start, 3, RawTag::StarStarEqual),
            (b'*', _) => self.fixed(start, 2, RawTag::StarStar),
            (b'=', _) => self.fixed(start, 2, RawTag::StarEqual),
            _ => self.fixed(start, 1, RawTag::Star),
        }
    }

    /// `x`, `xx` or `x=`.
    fn doubled_or_assign(
        &mut self,
        start: u32,
        single: RawTag,
        doubled: RawTag,
        assign: RawTag,
    ) -> RawToken {
        let b = self.cursor.current();
        match self.cursor.peek() {
            n if n == b => self.fixed(start, 2, doubled),
            b'=' => self.fixed(start, 2, assign),
            _ => self.fixed(start, 1, single),
        }
    }

    /// `x` or `x=`.
    fn with_assign(&mut self, start: u32, single: RawTag, assign: RawTag) -> RawToken {
        if self.cursor.peek() == b'=' {
            self.fixed(start, 2, assign)
        } else {
            self.fixed(start, 1, single)
        }
    }
}

impl Iterator for RawScanner<'_> {
    type Item = RawToken;

    fn next(&mut self) -> Option<RawToken> {
        let tok = self.next_token();
        if tok.tag == RawTag::Eof {
            None
        } else {
            Some(tok)
        }
    }
}

/// Length of a heredoc closing marker (indentation plus label) starting at
/// `at`, if the line there closes the heredoc labelled `label`.
fn closing_marker_len(at: Cursor<'_>, label: &[u8]) -> Option<u32> {
    let mut ahead = at;
    ahead.eat_blanks();
    if label.is_empty() || !ahead.starts_with(label) {
        return None;
    }
    ahead.advance_n(u32::try_from(label.len()).ok()?);
    if is_label_continue(ahead.current()) && !ahead.is_eof() {
        return None;
    }
    Some(ahead.pos() - at.pos())
}

/// 256-byte lookup table for label continuation bytes.
/// `true` for a-z, A-Z, 0-9, underscore and every byte >= 0x80.
/// The sentinel byte (0x00) maps to `false`, naturally terminating loops.
#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..=255, always fits in u8"
)]
static IS_LABEL_CONTINUE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0u16;
    while i < 256 {
        table[i as usize] = matches!(
            i as u8,
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_' | 0x80..=0xFF
        );
        i += 1;
    }
    table
};

/// Returns `true` if `b` can continue a label.
#[inline]
fn is_label_continue(b: u8) -> bool {
    IS_LABEL_CONTINUE_TABLE[b as usize]
}

/// Returns `true` if `b` can start a label.
#[inline]
fn is_label_start(b: u8) -> bool {
    is_label_continue(b) && !b.is_ascii_digit()
}

fn is_hex_digit(b: u8) -> bool {
    b.is_ascii_hexdigit()
}

fn is_binary_digit(b: u8) -> bool {
    matches!(b, b'0' | b'1')
}

fn is_octal_digit(b: u8) -> bool {
    matches!(b, b'0'..=b'7')
}

/// Convenience function: scan a source string and collect all raw tokens.
///
/// Returns every token except the final `Eof`. For streaming access,
/// construct a `SourceBuffer` + `RawScanner` directly.
pub fn tokenize(source: &str, options: ScanOptions) -> Vec<RawToken> {
    let buf = crate::SourceBuffer::new(source);
    RawScanner::with_options(buf.cursor(), options).collect()
}
