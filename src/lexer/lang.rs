//! Character classification rules and symbol tables for the language.
//!
//! Everything here is stateless: single-character (or character-pair)
//! predicates, the operator disambiguation table, and the queries that
//! map type keywords to their semantic primitive types. The scanner is
//! the only stateful part of the lexer and consumes these tables.

use lazy_static::lazy_static;
use std::collections::HashMap;

use super::tokens::TokenKind;

pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

pub fn is_identifier_begin(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

pub fn is_identifier_continuation(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

pub fn is_number_begin(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

/// At most one decimal point per literal. A literal is allowed to end
/// in `.` with no following digit; validating that is the parser's job.
pub fn is_number_continuation(c: char, seen_decimal: bool) -> bool {
    c.is_ascii_digit() || (c == '.' && !seen_decimal)
}

/// Lenient numeric forms the scanner accepts but the parser must
/// validate: a bare `.` and a literal with a trailing `.`.
pub fn number_needs_validation(lexeme: &str) -> bool {
    lexeme == "." || lexeme.ends_with('.')
}

pub fn is_comment_begin(c: char, next: Option<char>) -> bool {
    c == '/' && matches!(next, Some('/') | Some('*'))
}

pub fn is_line_comment(c: char, next: Option<char>) -> bool {
    c == '/' && next == Some('/')
}

pub fn is_block_comment_begin(c: char, next: Option<char>) -> bool {
    c == '/' && next == Some('*')
}

/// Block comments do not nest.
pub fn is_block_comment_end(c: char, next: Option<char>) -> bool {
    c == '*' && next == Some('/')
}

pub fn is_attribute_marker(c: char) -> bool {
    c == '@'
}

pub fn is_preprocessor_marker(c: char) -> bool {
    c == '#'
}

lazy_static! {
    /// Operator disambiguation table, keyed by first character.
    ///
    /// Each entry is an ordered list of `(second character, kind)`
    /// pairs; every two-character entry is listed before the
    /// single-character fallback (`None`), so a linear walk gives
    /// longest-match-first.
    pub static ref OPERATOR_LOOKUP: HashMap<char, Vec<(Option<char>, TokenKind)>> = {
        let mut map = HashMap::new();
        map.insert('+', vec![
            (Some('+'), TokenKind::PlusPlus),
            (Some('='), TokenKind::PlusEquals),
            (None, TokenKind::Plus),
        ]);
        map.insert('-', vec![
            (Some('-'), TokenKind::MinusMinus),
            (Some('='), TokenKind::MinusEquals),
            (None, TokenKind::Dash),
        ]);
        map.insert('*', vec![
            (Some('='), TokenKind::StarEquals),
            (None, TokenKind::Star),
        ]);
        map.insert('/', vec![
            (Some('='), TokenKind::SlashEquals),
            (None, TokenKind::Slash),
        ]);
        map.insert('%', vec![
            (Some('='), TokenKind::PercentEquals),
            (None, TokenKind::Percent),
        ]);
        map.insert('^', vec![
            (Some('='), TokenKind::CaretEquals),
            (Some('^'), TokenKind::CaretCaret),
            (None, TokenKind::Caret),
        ]);
        map.insert('&', vec![
            (Some('='), TokenKind::AmpersandEquals),
            (Some('&'), TokenKind::And),
            (None, TokenKind::Ampersand),
        ]);
        map.insert('|', vec![
            (Some('='), TokenKind::PipeEquals),
            (Some('|'), TokenKind::Or),
            (None, TokenKind::Pipe),
        ]);
        map.insert('!', vec![
            (Some('='), TokenKind::NotEquals),
            (None, TokenKind::Not),
        ]);
        map.insert('=', vec![
            (Some('='), TokenKind::Equals),
            (None, TokenKind::Assignment),
        ]);
        map.insert('<', vec![
            (Some('='), TokenKind::LessEquals),
            (Some('<'), TokenKind::ShiftLeft),
            (None, TokenKind::Less),
        ]);
        map.insert('>', vec![
            (Some('='), TokenKind::GreaterEquals),
            (Some('>'), TokenKind::ShiftRight),
            (None, TokenKind::Greater),
        ]);
        map.insert('?', vec![(None, TokenKind::Question)]);
        map.insert(':', vec![(None, TokenKind::Colon)]);
        map.insert('~', vec![(None, TokenKind::Tilde)]);
        map.insert('.', vec![(None, TokenKind::Dot)]);
        map.insert(',', vec![(None, TokenKind::Comma)]);
        map.insert(';', vec![(None, TokenKind::Semicolon)]);
        map.insert('(', vec![(None, TokenKind::OpenParen)]);
        map.insert(')', vec![(None, TokenKind::CloseParen)]);
        map.insert('{', vec![(None, TokenKind::OpenCurly)]);
        map.insert('}', vec![(None, TokenKind::CloseCurly)]);
        map.insert('[', vec![(None, TokenKind::OpenBracket)]);
        map.insert(']', vec![(None, TokenKind::CloseBracket)]);
        map
    };
}

/// Semantic tag for a built-in primitive type, consumed by the type
/// checker downstream of the lexer.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PrimitiveType {
    I32,
    U32,
    I64,
    U64,
    F32,
    F64,
    Chr,
    Str,
    Bit,
    Void,
}

pub fn is_type_token(kind: TokenKind) -> bool {
    primitive_type(kind).is_some()
}

pub fn primitive_type(kind: TokenKind) -> Option<PrimitiveType> {
    match kind {
        TokenKind::I32 => Some(PrimitiveType::I32),
        TokenKind::U32 => Some(PrimitiveType::U32),
        TokenKind::I64 => Some(PrimitiveType::I64),
        TokenKind::U64 => Some(PrimitiveType::U64),
        TokenKind::F32 => Some(PrimitiveType::F32),
        TokenKind::F64 => Some(PrimitiveType::F64),
        TokenKind::Chr => Some(PrimitiveType::Chr),
        TokenKind::Str => Some(PrimitiveType::Str),
        TokenKind::Bit => Some(PrimitiveType::Bit),
        TokenKind::Void => Some(PrimitiveType::Void),
        _ => None,
    }
}
