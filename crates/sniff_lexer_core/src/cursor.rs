//! Cursor over a sentinel-terminated buffer.
//!
//! The cursor advances through the buffer byte-by-byte. End of input is
//! detected when the current byte equals the sentinel (`0x00`) and the
//! position has reached the source length. No explicit bounds checking is
//! performed in the common case; the sentinel guarantees termination.
//!
//! # Interior Null Bytes
//!
//! A null at `pos < source_len` is an interior null (the scanner emits an
//! `InteriorNull` token for it); a null at `pos >= source_len` is the
//! sentinel.

/// Cursor over a sentinel-terminated byte buffer.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
/// The cursor is [`Copy`], enabling cheap state snapshots for backtracking
/// (heredoc and cast lookahead rely on this).
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Sentinel-terminated buffer (source + sentinel + padding).
    buf: &'a [u8],
    /// Current read position (byte index into `buf`).
    pos: u32,
    /// Length of actual source content (excludes sentinel and padding).
    source_len: u32,
}

/// Size assertion: &[u8] = 16 (fat pointer), u32 = 4, u32 = 4 => 24 bytes.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0 over a sentinel-terminated buffer.
    pub(crate) fn new(buf: &'a [u8], source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) < buf.len(),
            "sentinel must be within buffer bounds"
        );
        Self {
            buf,
            pos: 0,
            source_len,
        }
    }

    /// Returns the byte at the current position (`0x00` at end of input).
    #[inline]
    pub fn current(&self) -> u8 {
        self.byte_at(self.pos as usize)
    }

    /// Returns the byte one position ahead of current.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.byte_at(self.pos as usize + 1)
    }

    /// Returns the byte two positions ahead of current.
    #[inline]
    pub fn peek2(&self) -> u8 {
        self.byte_at(self.pos as usize + 2)
    }

    /// Returns the byte `n` positions ahead of current, or `0x00` past the
    /// padding.
    #[inline]
    pub fn peek_at(&self, n: u32) -> u8 {
        self.byte_at(self.pos as usize + n as usize)
    }

    #[inline]
    fn byte_at(&self, index: usize) -> u8 {
        if index < self.source_len as usize {
            self.buf[index]
        } else {
            0
        }
    }

    /// Advance the cursor by one byte.
    #[inline]
    pub fn advance(&mut self) {
        self.advance_n(1);
    }

    /// Advance the cursor by `n` bytes, never past the sentinel.
    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos = (self.pos + n).min(self.source_len);
    }

    /// Returns `true` if the cursor has reached end of input.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Length of the source content.
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Bytes from the current position to the end of the source content.
    #[inline]
    pub fn rest(&self) -> &'a [u8] {
        &self.buf[self.pos as usize..self.source_len as usize]
    }

    /// Extract a source substring as `&str`.
    ///
    /// Scanner token boundaries always fall on ASCII bytes or on runs of
    /// non-ASCII bytes consumed whole, so a buffer built from `&str` always
    /// slices to valid UTF-8 here.
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        let end = end.min(self.source_len) as usize;
        let start = (start as usize).min(end);
        std::str::from_utf8(&self.buf[start..end]).unwrap_or_default()
    }

    /// Extract a source substring from `start` to the current position.
    pub fn slice_from(&self, start: u32) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Returns `true` if the remaining source starts with `prefix`.
    #[inline]
    pub fn starts_with(&self, prefix: &[u8]) -> bool {
        self.rest().starts_with(prefix)
    }

    /// Returns `true` if the remaining source starts with `prefix`,
    /// comparing ASCII letters case-insensitively.
    pub fn starts_with_ignore_case(&self, prefix: &[u8]) -> bool {
        let rest = self.rest();
        rest.len() >= prefix.len() && rest[..prefix.len()].eq_ignore_ascii_case(prefix)
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// `pred(0)` must return `false`; the sentinel then terminates the loop.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.pos += 1;
        }
    }

    /// Advance past spaces, tabs, carriage returns and line feeds.
    #[inline]
    pub fn eat_whitespace(&mut self) {
        self.eat_while(is_php_whitespace);
    }

    /// Advance past spaces and tabs only.
    #[inline]
    pub fn eat_blanks(&mut self) {
        self.eat_while(|b| b == b' ' || b == b'\t');
    }

    /// Consume a single line break (`\n`, `\r\n` or a lone `\r`) if present.
    ///
    /// Returns `true` when a line break was consumed.
    pub fn eat_line_break(&mut self) -> bool {
        match self.current() {
            b'\n' => {
                self.advance();
                true
            }
            b'\r' => {
                self.advance();
                if self.current() == b'\n' {
                    self.advance();
                }
                true
            }
            _ => false,
        }
    }

    /// Advance to just past the next line break, or to end of input.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offsets are bounded by source_len which fits in u32"
    )]
    pub fn eat_line(&mut self) {
        match memchr::memchr2(b'\n', b'\r', self.rest()) {
            Some(offset) => {
                self.pos += offset as u32;
                self.eat_line_break();
            }
            None => self.pos = self.source_len,
        }
    }

    /// Advance to the next occurrence of `byte` (not consumed) or to end of
    /// input. Returns `true` when the byte was found.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offsets are bounded by source_len which fits in u32"
    )]
    pub fn eat_until(&mut self, byte: u8) -> bool {
        match memchr::memchr(byte, self.rest()) {
            Some(offset) => {
                self.pos += offset as u32;
                true
            }
            None => {
                self.pos = self.source_len;
                false
            }
        }
    }

    /// Advance to the first of two delimiter bytes, using SIMD search.
    ///
    /// Returns the byte found, or `0` at end of input.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offsets are bounded by source_len which fits in u32"
    )]
    pub fn skip_to_any2(&mut self, a: u8, b: u8) -> u8 {
        match memchr::memchr2(a, b, self.rest()) {
            Some(offset) => {
                self.pos += offset as u32;
                self.current()
            }
            None => {
                self.pos = self.source_len;
                0
            }
        }
    }

    /// Advance to the first of three delimiter bytes, using SIMD search.
    ///
    /// Returns the byte found, or `0` at end of input.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offsets are bounded by source_len which fits in u32"
    )]
    pub fn skip_to_any3(&mut self, a: u8, b: u8, c: u8) -> u8 {
        match memchr::memchr3(a, b, c, self.rest()) {
            Some(offset) => {
                self.pos += offset as u32;
                self.current()
            }
            None => {
                self.pos = self.source_len;
                0
            }
        }
    }

    /// Advance to just past the next `needle`, or to end of input.
    ///
    /// Returns `true` when the needle was found.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offsets are bounded by source_len which fits in u32"
    )]
    pub fn eat_past(&mut self, needle: &[u8]) -> bool {
        match memchr::memmem::find(self.rest(), needle) {
            Some(offset) => {
                self.pos += (offset + needle.len()) as u32;
                true
            }
            None => {
                self.pos = self.source_len;
                false
            }
        }
    }
}

/// PHP whitespace: space, tab, carriage return, line feed.
#[inline]
pub(crate) fn is_php_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n')
}

#[cfg(test)]
mod tests;
