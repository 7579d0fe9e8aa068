//! Keyword resolution for the cooking layer.
//!
//! PHP keywords are case-insensitive. Lookup lowercases the identifier into
//! a stack buffer (keywords are at most 15 bytes and pure ASCII), then uses
//! its length as a first-pass filter before matching the keywords of that
//! length.
//!
//! Context-sensitive keywords (`enum`, `match`, `readonly`, `fn`, ...) are
//! resolved here to their keyword code unconditionally; the re-classification
//! pass demotes them to `T_STRING` when their neighbours say otherwise.

use sniff_ir::TokenCode;

/// Longest keyword: `__halt_compiler`.
const MAX_KEYWORD_LEN: usize = 15;

/// Look up a keyword by its source text, ignoring ASCII case.
///
/// Returns `None` for plain identifiers.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<TokenCode> {
    let bytes = text.as_bytes();
    let len = bytes.len();

    // Guard: all keywords are 2-15 ASCII chars starting with a letter or `_`
    if !(2..=MAX_KEYWORD_LEN).contains(&len) || !bytes.is_ascii() {
        return None;
    }
    let first = bytes[0];
    if !(first.is_ascii_alphabetic() || first == b'_') {
        return None;
    }

    let mut buf = [0u8; MAX_KEYWORD_LEN];
    buf[..len].copy_from_slice(bytes);
    buf[..len].make_ascii_lowercase();
    let lower = std::str::from_utf8(&buf[..len]).ok()?;

    match len {
        2 => match lower {
            "as" => Some(TokenCode::As),
            "do" => Some(TokenCode::Do),
            "fn" => Some(TokenCode::Fn),
            "if" => Some(TokenCode::If),
            "or" => Some(TokenCode::LogicalOr),
            _ => None,
        },
        3 => match lower {
            "and" => Some(TokenCode::LogicalAnd),
            "die" => Some(TokenCode::Exit),
            "for" => Some(TokenCode::For),
            "new" => Some(TokenCode::New),
            "try" => Some(TokenCode::Try),
            "use" => Some(TokenCode::Use),
            "var" => Some(TokenCode::Var),
            "xor" => Some(TokenCode::LogicalXor),
            _ => None,
        },
        4 => match lower {
            "case" => Some(TokenCode::Case),
            "echo" => Some(TokenCode::Echo),
            "else" => Some(TokenCode::Else),
            "enum" => Some(TokenCode::Enum),
            "eval" => Some(TokenCode::Eval),
            "exit" => Some(TokenCode::Exit),
            "goto" => Some(TokenCode::Goto),
            "list" => Some(TokenCode::List),
            "null" => Some(TokenCode::Null),
            "self" => Some(TokenCode::SelfKw),
            "true" => Some(TokenCode::True),
            _ => None,
        },
        5 => match lower {
            "array" => Some(TokenCode::Array),
            "break" => Some(TokenCode::Break),
            "catch" => Some(TokenCode::Catch),
            "class" => Some(TokenCode::Class),
            "clone" => Some(TokenCode::Clone),
            "const" => Some(TokenCode::Const),
            "empty" => Some(TokenCode::Empty),
            "endif" => Some(TokenCode::Endif),
            "false" => Some(TokenCode::False),
            "final" => Some(TokenCode::Final),
            "isset" => Some(TokenCode::Isset),
            "match" => Some(TokenCode::Match),
            "print" => Some(TokenCode::Print),
            "throw" => Some(TokenCode::Throw),
            "trait" => Some(TokenCode::Trait),
            "unset" => Some(TokenCode::Unset),
            "while" => Some(TokenCode::While),
            "yield" => Some(TokenCode::Yield),
            _ => None,
        },
        6 => match lower {
            "elseif" => Some(TokenCode::Elseif),
            "endfor" => Some(TokenCode::Endfor),
            "global" => Some(TokenCode::Global),
            "parent" => Some(TokenCode::Parent),
            "public" => Some(TokenCode::Public),
            "return" => Some(TokenCode::Return),
            "static" => Some(TokenCode::Static),
            "switch" => Some(TokenCode::Switch),
            _ => None,
        },
        7 => match lower {
            "declare" => Some(TokenCode::Declare),
            "default" => Some(TokenCode::Default),
            "extends" => Some(TokenCode::Extends),
            "finally" => Some(TokenCode::Finally),
            "foreach" => Some(TokenCode::Foreach),
            "include" => Some(TokenCode::Include),
            "private" => Some(TokenCode::Private),
            "require" => Some(TokenCode::Require),
            "__dir__" => Some(TokenCode::Dir),
            _ => None,
        },
        8 => match lower {
            "abstract" => Some(TokenCode::Abstract),
            "callable" => Some(TokenCode::Callable),
            "continue" => Some(TokenCode::Continue),
            "endwhile" => Some(TokenCode::Endwhile),
            "function" => Some(TokenCode::Function),
            "readonly" => Some(TokenCode::Readonly),
            "__file__" => Some(TokenCode::File),
            "__line__" => Some(TokenCode::Line),
            _ => None,
        },
        9 => match lower {
            "endswitch" => Some(TokenCode::Endswitch),
            "insteadof" => Some(TokenCode::Insteadof),
            "interface" => Some(TokenCode::Interface),
            "namespace" => Some(TokenCode::Namespace),
            "protected" => Some(TokenCode::Protected),
            "__class__" => Some(TokenCode::ClassC),
            "__trait__" => Some(TokenCode::TraitC),
            _ => None,
        },
        10 => match lower {
            "enddeclare" => Some(TokenCode::Enddeclare),
            "endforeach" => Some(TokenCode::Endforeach),
            "implements" => Some(TokenCode::Implements),
            "instanceof" => Some(TokenCode::Instanceof),
            "__method__" => Some(TokenCode::MethodC),
            _ => None,
        },
        12 => match lower {
            "include_once" => Some(TokenCode::IncludeOnce),
            "require_once" => Some(TokenCode::RequireOnce),
            "__function__" => Some(TokenCode::FuncC),
            "__property__" => Some(TokenCode::PropertyC),
            _ => None,
        },
        13 => match lower {
            "__namespace__" => Some(TokenCode::NsC),
            _ => None,
        },
        15 => match lower {
            "__halt_compiler" => Some(TokenCode::HaltCompiler),
            _ => None,
        },
        _ => None,
    }
}

/// Cast keyword inside `( ... )`, ignoring ASCII case.
pub(crate) fn cast(word: &str) -> Option<TokenCode> {
    let code = match word.to_ascii_lowercase().as_str() {
        "int" | "integer" => TokenCode::IntCast,
        "bool" | "boolean" => TokenCode::BoolCast,
        "float" | "double" | "real" => TokenCode::DoubleCast,
        "string" => TokenCode::StringCast,
        "binary" => TokenCode::BinaryCast,
        "array" => TokenCode::ArrayCast,
        "object" => TokenCode::ObjectCast,
        "unset" => TokenCode::UnsetCast,
        _ => return None,
    };
    Some(code)
}
