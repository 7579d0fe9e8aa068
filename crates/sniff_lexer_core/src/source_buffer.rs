//! Zero-terminated copy of the source for the scanner.
//!
//! The scanner reads `0x00` as end of input, so the copy always carries one
//! trailing zero; the length is rounded up to a whole cache line.
//!
//! A NUL inside the source is only a candidate end: [`Cursor::is_eof`]
//! compares against the real length, so interior NULs scan as ordinary
//! bytes.
//!
//! [`Cursor::is_eof`]: crate::Cursor::is_eof

use crate::Cursor;

/// Bytes per padding block.
const CACHE_LINE: usize = 64;

/// Source bytes followed by at least one zero.
///
/// ```text
/// [source..., 0x00, 0x00...]   total length: next multiple of 64
///             ^ len
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    buf: Vec<u8>,
    len: u32,
}

impl SourceBuffer {
    /// Copy `source` into a zero-padded buffer.
    ///
    /// A source longer than `u32::MAX` bytes is cut short at that length.
    pub fn new(source: &str) -> Self {
        let bytes = source.as_bytes();
        let len = u32::try_from(bytes.len()).unwrap_or(u32::MAX);
        let content = &bytes[..len as usize];

        let padded = (content.len() + CACHE_LINE) & !(CACHE_LINE - 1);
        let mut buf = vec![0u8; padded];
        buf[..content.len()].copy_from_slice(content);

        SourceBuffer { buf, len }
    }

    /// The source, without the terminator.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len as usize]
    }

    /// A cursor at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.len)
    }

    #[inline]
    pub fn len(&self) -> u32 {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
