//! Line/column tracking and tab expansion.
//!
//! Token text is placed one piece at a time. A [`Placer`] remembers where
//! the previous piece ended, expands tabs against the running column, and
//! stamps the new token with its start position.

use sniff_ir::{Token, TokenCode};

/// Running position through a file.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Placer {
    line: u32,
    column: u32,
    tab_width: u32,
}

impl Placer {
    pub(crate) fn new(tab_width: u32) -> Self {
        Self::at(1, 1, tab_width)
    }

    /// Resume placement at a known position.
    pub(crate) fn at(line: u32, column: u32, tab_width: u32) -> Self {
        Placer {
            line,
            column,
            tab_width,
        }
    }

    /// Build a token for `text` at the current position and advance past it.
    ///
    /// Tabs are expanded to the next tab stop; the original text is kept in
    /// `orig_content` when expansion changed anything.
    pub(crate) fn place(&mut self, code: TokenCode, text: &str) -> Token {
        let (line, column) = (self.line, self.column);
        let expanded = self.advance(text);
        match expanded {
            Some(content) => {
                let mut token = Token::new(code, content, line, column);
                token.orig_content = Some(text.to_owned());
                token
            }
            None => Token::new(code, text, line, column),
        }
    }

    /// Move past `text`, returning its tab-expanded form if it differs.
    fn advance(&mut self, text: &str) -> Option<String> {
        let expand = self.tab_width > 0 && text.contains('\t');
        let mut out = expand.then(|| String::with_capacity(text.len() + 8));
        let mut chars = text.chars().peekable();
        while let Some(c) = chars.next() {
            match c {
                '\t' if expand => {
                    let width = self.tab_width - (self.column - 1) % self.tab_width;
                    if let Some(out) = out.as_mut() {
                        out.push_str(&" ".repeat(width as usize));
                    }
                    self.column += width;
                }
                '\r' if chars.peek() == Some(&'\n') => {
                    // The `\n` half ends the line.
                    self.column += 1;
                    if let Some(out) = out.as_mut() {
                        out.push(c);
                    }
                }
                '\r' | '\n' => {
                    self.line += 1;
                    self.column = 1;
                    if let Some(out) = out.as_mut() {
                        out.push(c);
                    }
                }
                _ => {
                    self.column += 1;
                    if let Some(out) = out.as_mut() {
                        out.push(c);
                    }
                }
            }
        }
        out
    }
}

/// Byte offsets just past each line break in `text`.
///
/// `\r\n`, lone `\r` and `\n` all count as one break.
pub(crate) fn line_ends(text: &str) -> impl Iterator<Item = usize> + '_ {
    let bytes = text.as_bytes();
    let mut pos = 0;
    std::iter::from_fn(move || {
        while pos < bytes.len() {
            let b = bytes[pos];
            pos += 1;
            match b {
                b'\n' => return Some(pos),
                b'\r' => {
                    if bytes.get(pos) == Some(&b'\n') {
                        pos += 1;
                    }
                    return Some(pos);
                }
                _ => {}
            }
        }
        None
    })
}

/// Split `text` into lines, each keeping its trailing line break.
pub(crate) fn split_lines(text: &str) -> impl Iterator<Item = &str> + '_ {
    let mut start = 0;
    let mut ends = line_ends(text);
    std::iter::from_fn(move || {
        if start >= text.len() {
            return None;
        }
        let end = ends.next().unwrap_or(text.len());
        let line = &text[start..end];
        start = end;
        Some(line)
    })
}
