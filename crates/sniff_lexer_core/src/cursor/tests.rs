use crate::SourceBuffer;

// === Basic Navigation ===

#[test]
fn current_returns_first_byte() {
    let buf = SourceBuffer::new("abc");
    let cursor = buf.cursor();
    assert_eq!(cursor.current(), b'a');
    assert_eq!(cursor.peek(), b'b');
    assert_eq!(cursor.peek2(), b'c');
}

#[test]
fn advance_stops_at_sentinel() {
    let buf = SourceBuffer::new("ab");
    let mut cursor = buf.cursor();
    cursor.advance_n(10);
    assert_eq!(cursor.pos(), 2);
    assert!(cursor.is_eof());
}

#[test]
fn interior_null_is_not_eof() {
    let buf = SourceBuffer::new("a\0b");
    let mut cursor = buf.cursor();
    cursor.advance();
    assert_eq!(cursor.current(), 0);
    assert!(!cursor.is_eof());
}

// === Slicing ===

#[test]
fn slice_returns_text() {
    let buf = SourceBuffer::new("<?php echo");
    let cursor = buf.cursor();
    assert_eq!(cursor.slice(0, 5), "<?php");
    assert_eq!(cursor.slice(6, 10), "echo");
}

#[test]
fn slice_clamps_to_source() {
    let buf = SourceBuffer::new("abc");
    let cursor = buf.cursor();
    assert_eq!(cursor.slice(1, 99), "bc");
}

#[test]
fn slice_from_current() {
    let buf = SourceBuffer::new("hello world");
    let mut cursor = buf.cursor();
    cursor.advance_n(5);
    assert_eq!(cursor.slice_from(0), "hello");
}

// === Prefix checks ===

#[test]
fn starts_with_ignore_case_matches_mixed_case() {
    let buf = SourceBuffer::new("<?PhP ");
    let cursor = buf.cursor();
    assert!(cursor.starts_with_ignore_case(b"<?php"));
    assert!(!cursor.starts_with(b"<?php"));
}

#[test]
fn starts_with_fails_past_end() {
    let buf = SourceBuffer::new("<?");
    assert!(!buf.cursor().starts_with_ignore_case(b"<?php"));
}

// === Bulk scanning ===

#[test]
fn eat_whitespace_includes_line_breaks() {
    let buf = SourceBuffer::new(" \t\r\n x");
    let mut cursor = buf.cursor();
    cursor.eat_whitespace();
    assert_eq!(cursor.current(), b'x');
}

#[test]
fn eat_blanks_stops_at_newline() {
    let buf = SourceBuffer::new(" \t\nx");
    let mut cursor = buf.cursor();
    cursor.eat_blanks();
    assert_eq!(cursor.current(), b'\n');
}

#[test]
fn eat_line_consumes_crlf() {
    let buf = SourceBuffer::new("#!/bin/php\r\n<?php");
    let mut cursor = buf.cursor();
    cursor.eat_line();
    assert_eq!(cursor.pos(), 12);
    assert!(cursor.starts_with(b"<?php"));
}

#[test]
fn eat_line_without_break_reaches_eof() {
    let buf = SourceBuffer::new("no newline");
    let mut cursor = buf.cursor();
    cursor.eat_line();
    assert!(cursor.is_eof());
}

#[test]
fn eat_until_reports_missing_byte() {
    let buf = SourceBuffer::new("abc<def");
    let mut cursor = buf.cursor();
    assert!(cursor.eat_until(b'<'));
    assert_eq!(cursor.pos(), 3);
    assert!(!cursor.eat_until(b'?'));
    assert!(cursor.is_eof());
}

#[test]
fn skip_to_any3_finds_earliest() {
    let buf = SourceBuffer::new("abc\\def\"");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.skip_to_any3(b'"', b'\\', b'{'), b'\\');
    assert_eq!(cursor.pos(), 3);
}

#[test]
fn skip_to_any3_returns_zero_at_eof() {
    let buf = SourceBuffer::new("plain text");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.skip_to_any3(b'"', b'\\', b'{'), 0);
    assert!(cursor.is_eof());
}

#[test]
fn eat_past_consumes_needle() {
    let buf = SourceBuffer::new("/* body */ rest");
    let mut cursor = buf.cursor();
    cursor.advance_n(2);
    assert!(cursor.eat_past(b"*/"));
    assert_eq!(cursor.slice_from(0), "/* body */");
}

#[test]
fn eat_past_unterminated_runs_to_eof() {
    let buf = SourceBuffer::new("/* open");
    let mut cursor = buf.cursor();
    cursor.advance_n(2);
    assert!(!cursor.eat_past(b"*/"));
    assert!(cursor.is_eof());
}

#[test]
fn cursor_is_copy_for_backtracking() {
    let buf = SourceBuffer::new("abc");
    let mut cursor = buf.cursor();
    let snapshot = cursor;
    cursor.advance_n(2);
    assert_eq!(snapshot.pos(), 0);
    assert_eq!(cursor.pos(), 2);
}
