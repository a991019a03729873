use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("i32", TokenKind::I32);
        map.insert("u32", TokenKind::U32);
        map.insert("i64", TokenKind::I64);
        map.insert("u64", TokenKind::U64);
        map.insert("f32", TokenKind::F32);
        map.insert("f64", TokenKind::F64);
        map.insert("chr", TokenKind::Chr);
        map.insert("str", TokenKind::Str);
        map.insert("bit", TokenKind::Bit);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("for", TokenKind::For);
        map.insert("while", TokenKind::While);
        map.insert("break", TokenKind::Break);
        map.insert("continue", TokenKind::Continue);
        map.insert("fn", TokenKind::Fn);
        map.insert("return", TokenKind::Return);
        map.insert("void", TokenKind::Void);
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map.insert("null", TokenKind::Null);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Number,
    Identifier,
    Unrecognised,

    At,   // attribute marker
    Hash, // preprocessor marker

    Tilde,

    OpenBracket,
    CloseBracket,
    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,

    Assignment, // =
    Equals,     // ==
    Not,        // !
    NotEquals,  // !=

    Less,
    LessEquals,
    ShiftLeft,
    Greater,
    GreaterEquals,
    ShiftRight,

    Or,  // ||
    And, // &&
    Pipe,
    Ampersand,
    Caret,
    CaretCaret,

    Dot,
    Semicolon,
    Colon,
    Question,
    Comma,

    PlusPlus,
    MinusMinus,
    PlusEquals,
    MinusEquals,
    StarEquals,
    SlashEquals,
    PercentEquals,
    CaretEquals,
    AmpersandEquals,
    PipeEquals,

    Plus,
    Dash,
    Slash,
    Star,
    Percent,

    // Reserved
    I32,
    U32,
    I64,
    U64,
    F32,
    F64,
    Chr,
    Str,
    Bit,
    If,
    Else,
    For,
    While,
    Break,
    Continue,
    Fn,
    Return,
    Void,
    True,
    False,
    Null,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\nlexeme: {}}}", self.kind, self.lexeme())
    }
}

impl Token {
    /// The exact source text this token covers.
    pub fn lexeme(&self) -> &str {
        self.span.lexeme()
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EOF
    }

    fn is_one_of_many(&self, tokens: Vec<TokenKind>) -> bool {
        for token in tokens {
            if token == self.kind {
                return true;
            }
        }

        false
    }

    pub fn debug(&self) {
        if self.is_one_of_many(vec![
            TokenKind::Identifier,
            TokenKind::Number,
            TokenKind::Unrecognised,
        ]) {
            println!("{} ({})", self.kind, self.lexeme());
        } else {
            println!("{} ()", self.kind);
        }
    }
}
