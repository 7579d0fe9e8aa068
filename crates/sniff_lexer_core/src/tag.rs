//! Raw token tags produced by the scanner.

/// Raw token kind, with semantic range layout.
///
/// | Range   | Category                 |
/// |---------|--------------------------|
/// | 0-15    | Words and literals       |
/// | 16-31   | Markup, tags, heredocs   |
/// | 32-79   | Operators                |
/// | 80-95   | Delimiters               |
/// | 112-119 | Trivia                   |
/// | 240-247 | Degraded input           |
/// | 255     | End of input             |
///
/// Degraded tags never abort scanning: the scanner closes the construct at
/// end of input (or at the offending byte) and keeps going.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
#[non_exhaustive]
pub enum RawTag {
    // === Words & literals (0-15) ===
    /// Label: `[a-zA-Z_\x80-\xff][a-zA-Z0-9_\x80-\xff]*`.
    Ident = 0,
    /// `$name`.
    Variable = 1,
    /// Integer literal in any radix.
    Int = 2,
    /// Float literal (fraction and/or exponent).
    Float = 3,
    /// `'...'`.
    SingleQuoted = 4,
    /// `"..."`, interpolation included.
    DoubleQuoted = 5,
    /// `` `...` `` shell-exec string.
    Backtick = 6,

    // === Markup, tags, heredocs (16-31) ===
    /// Text outside of `<?php ... ?>`.
    InlineHtml = 16,
    /// `<?php` or short `<?`, plus one following blank.
    OpenTag = 17,
    /// `<?=`.
    OpenTagWithEcho = 18,
    /// `?>`, plus one following line break.
    CloseTag = 19,
    /// `<<<ID` / `<<<"ID"` including the line break.
    StartHeredoc = 20,
    /// `<<<'ID'` including the line break.
    StartNowdoc = 21,
    /// Heredoc body text.
    HeredocBody = 22,
    /// Nowdoc body text.
    NowdocBody = 23,
    /// Closing heredoc marker, with its indentation.
    EndHeredoc = 24,
    /// Closing nowdoc marker, with its indentation.
    EndNowdoc = 25,
    /// UTF-8 byte-order mark at the very start of the file.
    ByteOrderMark = 26,
    /// `#!...` line at the very start of the file.
    Shebang = 27,

    // === Operators (32-79) ===
    Plus = 32,
    Minus = 33,
    Star = 34,
    Slash = 35,
    Percent = 36,
    Caret = 37,
    Ampersand = 38,
    Pipe = 39,
    Tilde = 40,
    Bang = 41,
    Equal = 42,
    Less = 43,
    Greater = 44,
    Dot = 45,
    Question = 46,
    Colon = 47,
    At = 48,
    Dollar = 49,
    Backslash = 50,
    PlusPlus = 51,
    MinusMinus = 52,
    PlusEqual = 53,
    MinusEqual = 54,
    StarEqual = 55,
    SlashEqual = 56,
    PercentEqual = 57,
    CaretEqual = 58,
    AmpersandEqual = 59,
    PipeEqual = 60,
    DotEqual = 61,
    StarStar = 62,
    StarStarEqual = 63,
    Shl = 64,
    Shr = 65,
    ShlEqual = 66,
    ShrEqual = 67,
    EqualEqual = 68,
    EqualEqualEqual = 69,
    BangEqual = 70,
    BangEqualEqual = 71,
    LessGreater = 72,
    LessEqual = 73,
    GreaterEqual = 74,
    Spaceship = 75,
    AmpersandAmpersand = 76,
    PipePipe = 77,
    QuestionQuestion = 78,
    Arrow = 79,

    // === Delimiters (80-95) ===
    LeftParen = 80,
    RightParen = 81,
    LeftBracket = 82,
    RightBracket = 83,
    LeftBrace = 84,
    RightBrace = 85,
    Comma = 86,
    Semicolon = 87,
    ColonColon = 88,
    DoubleArrow = 89,
    Ellipsis = 90,
    /// `#[` attribute opener.
    HashBracket = 91,

    // === Trivia (112-119) ===
    /// Run of spaces, tabs, `\r` and `\n`.
    Whitespace = 112,
    /// `// ...` or `# ...`, including the terminating line break.
    LineComment = 113,
    /// `/* ... */`.
    BlockComment = 114,
    /// `/** ... */`.
    DocComment = 115,

    // === Degraded input (240-247) ===
    /// String or shell string without a closing quote (runs to end of input).
    UnterminatedString = 240,
    /// A byte that starts no token (ASCII control characters).
    Unknown = 241,
    /// NUL byte inside the source content.
    InteriorNull = 242,

    // === Control ===
    Eof = 255,
}

/// A raw token: tag plus byte length. Offsets are tracked by the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RawToken {
    pub tag: RawTag,
    pub len: u32,
}

impl RawTag {
    /// Fixed source text for tags that always have the same spelling.
    ///
    /// Returns `None` for tags whose text varies (identifiers, literals,
    /// trivia, markup).
    pub fn lexeme(self) -> Option<&'static str> {
        Some(match self {
            RawTag::Plus => "+",
            RawTag::Minus => "-",
            RawTag::Star => "*",
            RawTag::Slash => "/",
            RawTag::Percent => "%",
            RawTag::Caret => "^",
            RawTag::Ampersand => "&",
            RawTag::Pipe => "|",
            RawTag::Tilde => "~",
            RawTag::Bang => "!",
            RawTag::Equal => "=",
            RawTag::Less => "<",
            RawTag::Greater => ">",
            RawTag::Dot => ".",
            RawTag::Question => "?",
            RawTag::Colon => ":",
            RawTag::At => "@",
            RawTag::Dollar => "$",
            RawTag::Backslash => "\\",
            RawTag::PlusPlus => "++",
            RawTag::MinusMinus => "--",
            RawTag::PlusEqual => "+=",
            RawTag::MinusEqual => "-=",
            RawTag::StarEqual => "*=",
            RawTag::SlashEqual => "/=",
            RawTag::PercentEqual => "%=",
            RawTag::CaretEqual => "^=",
            RawTag::AmpersandEqual => "&=",
            RawTag::PipeEqual => "|=",
            RawTag::DotEqual => ".=",
            RawTag::StarStar => "**",
            RawTag::StarStarEqual => "**=",
            RawTag::Shl => "<<",
            RawTag::Shr => ">>",
            RawTag::ShlEqual => "<<=",
            RawTag::ShrEqual => ">>=",
            RawTag::EqualEqual => "==",
            RawTag::EqualEqualEqual => "===",
            RawTag::BangEqual => "!=",
            RawTag::BangEqualEqual => "!==",
            RawTag::LessGreater => "<>",
            RawTag::LessEqual => "<=",
            RawTag::GreaterEqual => ">=",
            RawTag::Spaceship => "<=>",
            RawTag::AmpersandAmpersand => "&&",
            RawTag::PipePipe => "||",
            RawTag::QuestionQuestion => "??",
            RawTag::Arrow => "->",
            RawTag::LeftParen => "(",
            RawTag::RightParen => ")",
            RawTag::LeftBracket => "[",
            RawTag::RightBracket => "]",
            RawTag::LeftBrace => "{",
            RawTag::RightBrace => "}",
            RawTag::Comma => ",",
            RawTag::Semicolon => ";",
            RawTag::ColonColon => "::",
            RawTag::DoubleArrow => "=>",
            RawTag::Ellipsis => "...",
            RawTag::HashBracket => "#[",
            RawTag::OpenTagWithEcho => "<?=",
            RawTag::Eof => "",
            _ => return None,
        })
    }

    /// Returns `true` for whitespace and comments.
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            RawTag::Whitespace | RawTag::LineComment | RawTag::BlockComment | RawTag::DocComment
        )
    }

    /// Returns `true` for tags that only appear on degraded input.
    pub fn is_degraded(self) -> bool {
        (self as u8) >= 240 && self != RawTag::Eof
    }
}

#[cfg(test)]
mod tests;
