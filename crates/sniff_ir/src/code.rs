//! Stable symbolic token codes.
//!
//! Every token in the store carries a [`TokenCode`]. The code's
//! [`name()`](TokenCode::name) is the `T_*` spelling rules and dialect
//! descriptions use to refer to it; names are stable across releases,
//! discriminant values are not.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Defines `TokenCode` together with its name table.
///
/// Generates the enum, `ALL`, `name()` and `from_name()` from a single list
/// so the two spellings can never drift apart.
macro_rules! define_token_codes {
    ($($(#[$meta:meta])* $variant:ident => $name:literal,)*) => {
        /// Symbolic token type.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum TokenCode {
            $($(#[$meta])* $variant,)*
        }

        impl TokenCode {
            /// Every code, in declaration order.
            pub const ALL: &'static [TokenCode] = &[$(TokenCode::$variant,)*];

            /// The `T_*` name of this code.
            pub const fn name(self) -> &'static str {
                match self {
                    $(TokenCode::$variant => $name,)*
                }
            }

            /// Resolve a `T_*` name back to its code.
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($name => Some(TokenCode::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

define_token_codes! {
    // === Markup & tags ===
    /// Text outside of code regions, byte-order marks and `#!` lines.
    InlineHtml => "T_INLINE_HTML",
    OpenTag => "T_OPEN_TAG",
    OpenTagWithEcho => "T_OPEN_TAG_WITH_ECHO",
    CloseTag => "T_CLOSE_TAG",

    // === Trivia ===
    Whitespace => "T_WHITESPACE",
    /// Line and block comments.
    Comment => "T_COMMENT",
    DocCommentOpenTag => "T_DOC_COMMENT_OPEN_TAG",
    DocCommentCloseTag => "T_DOC_COMMENT_CLOSE_TAG",
    DocCommentStar => "T_DOC_COMMENT_STAR",
    DocCommentWhitespace => "T_DOC_COMMENT_WHITESPACE",
    /// `@name` inside a doc comment.
    DocCommentTag => "T_DOC_COMMENT_TAG",
    DocCommentString => "T_DOC_COMMENT_STRING",

    // === Names & literals ===
    Variable => "T_VARIABLE",
    /// Identifiers, and keywords used as names.
    String => "T_STRING",
    LNumber => "T_LNUMBER",
    DNumber => "T_DNUMBER",
    /// Single-quoted strings and double-quoted strings without interpolation.
    ConstantEncapsedString => "T_CONSTANT_ENCAPSED_STRING",
    DoubleQuotedString => "T_DOUBLE_QUOTED_STRING",
    /// Unterminated string text.
    EncapsedAndWhitespace => "T_ENCAPSED_AND_WHITESPACE",
    /// A complete `` `...` `` shell-exec string.
    Backtick => "T_BACKTICK",
    StartHeredoc => "T_START_HEREDOC",
    Heredoc => "T_HEREDOC",
    EndHeredoc => "T_END_HEREDOC",
    StartNowdoc => "T_START_NOWDOC",
    Nowdoc => "T_NOWDOC",
    EndNowdoc => "T_END_NOWDOC",
    /// A byte that starts no token.
    BadCharacter => "T_BAD_CHARACTER",
    /// A named argument label (`name:` in a call).
    ParamName => "T_PARAM_NAME",
    GotoLabel => "T_GOTO_LABEL",

    // === Declarations ===
    Namespace => "T_NAMESPACE",
    NsSeparator => "T_NS_SEPARATOR",
    Use => "T_USE",
    OpenUseGroup => "T_OPEN_USE_GROUP",
    CloseUseGroup => "T_CLOSE_USE_GROUP",
    Class => "T_CLASS",
    AnonClass => "T_ANON_CLASS",
    Interface => "T_INTERFACE",
    Trait => "T_TRAIT",
    Enum => "T_ENUM",
    EnumCase => "T_ENUM_CASE",
    Extends => "T_EXTENDS",
    Implements => "T_IMPLEMENTS",
    Function => "T_FUNCTION",
    Closure => "T_CLOSURE",
    Fn => "T_FN",
    FnArrow => "T_FN_ARROW",
    Abstract => "T_ABSTRACT",
    Final => "T_FINAL",
    Public => "T_PUBLIC",
    Protected => "T_PROTECTED",
    Private => "T_PRIVATE",
    Static => "T_STATIC",
    Readonly => "T_READONLY",
    Var => "T_VAR",
    Const => "T_CONST",
    Callable => "T_CALLABLE",
    SelfKw => "T_SELF",
    Parent => "T_PARENT",

    // === Control flow ===
    If => "T_IF",
    Else => "T_ELSE",
    Elseif => "T_ELSEIF",
    Endif => "T_ENDIF",
    While => "T_WHILE",
    Endwhile => "T_ENDWHILE",
    Do => "T_DO",
    For => "T_FOR",
    Endfor => "T_ENDFOR",
    Foreach => "T_FOREACH",
    Endforeach => "T_ENDFOREACH",
    As => "T_AS",
    Switch => "T_SWITCH",
    Endswitch => "T_ENDSWITCH",
    Case => "T_CASE",
    Default => "T_DEFAULT",
    Match => "T_MATCH",
    MatchArrow => "T_MATCH_ARROW",
    MatchDefault => "T_MATCH_DEFAULT",
    Break => "T_BREAK",
    Continue => "T_CONTINUE",
    Return => "T_RETURN",
    Yield => "T_YIELD",
    YieldFrom => "T_YIELD_FROM",
    Try => "T_TRY",
    Catch => "T_CATCH",
    Finally => "T_FINALLY",
    Throw => "T_THROW",
    Goto => "T_GOTO",
    Declare => "T_DECLARE",
    Enddeclare => "T_ENDDECLARE",
    Exit => "T_EXIT",
    HaltCompiler => "T_HALT_COMPILER",

    // === Language constructs ===
    Global => "T_GLOBAL",
    Echo => "T_ECHO",
    Print => "T_PRINT",
    Include => "T_INCLUDE",
    IncludeOnce => "T_INCLUDE_ONCE",
    Require => "T_REQUIRE",
    RequireOnce => "T_REQUIRE_ONCE",
    Eval => "T_EVAL",
    Isset => "T_ISSET",
    Unset => "T_UNSET",
    Empty => "T_EMPTY",
    List => "T_LIST",
    Array => "T_ARRAY",
    New => "T_NEW",
    Clone => "T_CLONE",
    Instanceof => "T_INSTANCEOF",
    Insteadof => "T_INSTEADOF",
    True => "T_TRUE",
    False => "T_FALSE",
    Null => "T_NULL",
    LogicalAnd => "T_LOGICAL_AND",
    LogicalOr => "T_LOGICAL_OR",
    LogicalXor => "T_LOGICAL_XOR",

    // === Magic constants ===
    Line => "T_LINE",
    File => "T_FILE",
    Dir => "T_DIR",
    ClassC => "T_CLASS_C",
    TraitC => "T_TRAIT_C",
    MethodC => "T_METHOD_C",
    FuncC => "T_FUNC_C",
    NsC => "T_NS_C",
    PropertyC => "T_PROPERTY_C",

    // === Casts ===
    IntCast => "T_INT_CAST",
    DoubleCast => "T_DOUBLE_CAST",
    StringCast => "T_STRING_CAST",
    ArrayCast => "T_ARRAY_CAST",
    ObjectCast => "T_OBJECT_CAST",
    BoolCast => "T_BOOL_CAST",
    UnsetCast => "T_UNSET_CAST",
    BinaryCast => "T_BINARY_CAST",

    // === Operators ===
    Plus => "T_PLUS",
    Minus => "T_MINUS",
    Multiply => "T_MULTIPLY",
    Divide => "T_DIVIDE",
    Modulus => "T_MODULUS",
    Pow => "T_POW",
    PowEqual => "T_POW_EQUAL",
    BitwiseAnd => "T_BITWISE_AND",
    BitwiseOr => "T_BITWISE_OR",
    BitwiseXor => "T_BITWISE_XOR",
    BitwiseNot => "T_BITWISE_NOT",
    BooleanNot => "T_BOOLEAN_NOT",
    BooleanAnd => "T_BOOLEAN_AND",
    BooleanOr => "T_BOOLEAN_OR",
    Equal => "T_EQUAL",
    IsEqual => "T_IS_EQUAL",
    IsIdentical => "T_IS_IDENTICAL",
    IsNotEqual => "T_IS_NOT_EQUAL",
    IsNotIdentical => "T_IS_NOT_IDENTICAL",
    LessThan => "T_LESS_THAN",
    GreaterThan => "T_GREATER_THAN",
    IsSmallerOrEqual => "T_IS_SMALLER_OR_EQUAL",
    IsGreaterOrEqual => "T_IS_GREATER_OR_EQUAL",
    Spaceship => "T_SPACESHIP",
    PlusEqual => "T_PLUS_EQUAL",
    MinusEqual => "T_MINUS_EQUAL",
    MulEqual => "T_MUL_EQUAL",
    DivEqual => "T_DIV_EQUAL",
    ModEqual => "T_MOD_EQUAL",
    AndEqual => "T_AND_EQUAL",
    OrEqual => "T_OR_EQUAL",
    XorEqual => "T_XOR_EQUAL",
    ConcatEqual => "T_CONCAT_EQUAL",
    Sl => "T_SL",
    Sr => "T_SR",
    SlEqual => "T_SL_EQUAL",
    SrEqual => "T_SR_EQUAL",
    Inc => "T_INC",
    Dec => "T_DEC",
    StringConcat => "T_STRING_CONCAT",
    Coalesce => "T_COALESCE",
    CoalesceEqual => "T_COALESCE_EQUAL",
    ObjectOperator => "T_OBJECT_OPERATOR",
    NullsafeObjectOperator => "T_NULLSAFE_OBJECT_OPERATOR",
    DoubleColon => "T_DOUBLE_COLON",
    DoubleArrow => "T_DOUBLE_ARROW",
    Ellipsis => "T_ELLIPSIS",
    Asperand => "T_ASPERAND",
    Dollar => "T_DOLLAR",
    InlineThen => "T_INLINE_THEN",
    InlineElse => "T_INLINE_ELSE",
    Nullable => "T_NULLABLE",
    TypeUnion => "T_TYPE_UNION",
    TypeIntersection => "T_TYPE_INTERSECTION",

    // === Punctuation ===
    Colon => "T_COLON",
    Semicolon => "T_SEMICOLON",
    Comma => "T_COMMA",
    OpenParenthesis => "T_OPEN_PARENTHESIS",
    CloseParenthesis => "T_CLOSE_PARENTHESIS",
    OpenSquareBracket => "T_OPEN_SQUARE_BRACKET",
    CloseSquareBracket => "T_CLOSE_SQUARE_BRACKET",
    OpenShortArray => "T_OPEN_SHORT_ARRAY",
    CloseShortArray => "T_CLOSE_SHORT_ARRAY",
    OpenCurlyBracket => "T_OPEN_CURLY_BRACKET",
    CloseCurlyBracket => "T_CLOSE_CURLY_BRACKET",
    /// `#[` attribute opener.
    Attribute => "T_ATTRIBUTE",
    /// The `]` closing an attribute.
    AttributeEnd => "T_ATTRIBUTE_END",
}

impl TokenCode {
    /// Every code for which [`is_empty`](Self::is_empty) holds, for use
    /// with [`Search::not`](crate::Search::not).
    pub const EMPTY: &'static [TokenCode] = &[
        TokenCode::Whitespace,
        TokenCode::Comment,
        TokenCode::DocCommentOpenTag,
        TokenCode::DocCommentCloseTag,
        TokenCode::DocCommentStar,
        TokenCode::DocCommentWhitespace,
        TokenCode::DocCommentTag,
        TokenCode::DocCommentString,
    ];

    /// Whitespace and comments: tokens rules skip when looking for the
    /// previous or next "real" token.
    pub const fn is_empty(self) -> bool {
        matches!(self, TokenCode::Whitespace) || self.is_comment()
    }

    /// Plain and doc comments, including every doc-comment sub-token.
    pub const fn is_comment(self) -> bool {
        matches!(self, TokenCode::Comment) || self.is_doc_comment()
    }

    /// Doc-comment sub-tokens.
    pub const fn is_doc_comment(self) -> bool {
        matches!(
            self,
            TokenCode::DocCommentOpenTag
                | TokenCode::DocCommentCloseTag
                | TokenCode::DocCommentStar
                | TokenCode::DocCommentWhitespace
                | TokenCode::DocCommentTag
                | TokenCode::DocCommentString
        )
    }

    pub const fn is_cast(self) -> bool {
        matches!(
            self,
            TokenCode::IntCast
                | TokenCode::DoubleCast
                | TokenCode::StringCast
                | TokenCode::ArrayCast
                | TokenCode::ObjectCast
                | TokenCode::BoolCast
                | TokenCode::UnsetCast
                | TokenCode::BinaryCast
        )
    }

    pub const fn is_magic_constant(self) -> bool {
        matches!(
            self,
            TokenCode::Line
                | TokenCode::File
                | TokenCode::Dir
                | TokenCode::ClassC
                | TokenCode::TraitC
                | TokenCode::MethodC
                | TokenCode::FuncC
                | TokenCode::NsC
                | TokenCode::PropertyC
        )
    }

    /// Text literals of every flavour.
    pub const fn is_text_string(self) -> bool {
        matches!(
            self,
            TokenCode::ConstantEncapsedString
                | TokenCode::DoubleQuotedString
                | TokenCode::EncapsedAndWhitespace
                | TokenCode::Backtick
                | TokenCode::Heredoc
                | TokenCode::Nowdoc
        )
    }

    /// Tokens that end a statement when scanning for statement boundaries.
    pub const fn is_statement_end(self) -> bool {
        matches!(
            self,
            TokenCode::Semicolon | TokenCode::CloseTag | TokenCode::OpenTag
        )
    }

    /// Assignment operators, plain and compound.
    pub const fn is_assignment(self) -> bool {
        matches!(
            self,
            TokenCode::Equal
                | TokenCode::PlusEqual
                | TokenCode::MinusEqual
                | TokenCode::MulEqual
                | TokenCode::DivEqual
                | TokenCode::ModEqual
                | TokenCode::PowEqual
                | TokenCode::AndEqual
                | TokenCode::OrEqual
                | TokenCode::XorEqual
                | TokenCode::ConcatEqual
                | TokenCode::SlEqual
                | TokenCode::SrEqual
                | TokenCode::CoalesceEqual
        )
    }
}

impl Default for TokenCode {
    fn default() -> Self {
        TokenCode::Whitespace
    }
}

impl fmt::Display for TokenCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for TokenCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for TokenCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        TokenCode::from_name(&name)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown token code `{name}`")))
    }
}

#[cfg(test)]
mod tests;
