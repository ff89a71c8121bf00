use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("while", TokenKind::While);
        map.insert("int", TokenKind::Int);
        map.insert("float", TokenKind::Float);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Identifier,
    Number,      // integer literal
    FloatNumber, // literal containing a `.`

    OpenParen,
    CloseParen,
    OpenCurly,
    CloseCurly,
    Comma,
    Colon,

    Assignment, // =
    Equals,     // ==
    NotEquals,  // !=
    Less,
    Greater,

    Plus,
    Dash,
    Star,
    Slash,

    // Reserved
    If,
    Else,
    While,
    Int,
    Float,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// The literal carried by a token: source text for words and symbols, the parsed value for numbers.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    Word(String),
    Int(i64),
    Float(f64),
    None,
}

impl Display for TokenValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenValue::Word(word) => write!(f, "{}", word),
            TokenValue::Int(value) => write!(f, "{}", value),
            TokenValue::Float(value) => write!(f, "{:?}", value),
            TokenValue::None => write!(f, "None"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: TokenValue,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.kind, self.value)
    }
}

impl Token {
    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    /// The word carried by identifier, keyword and symbol tokens.
    pub fn word(&self) -> Option<&str> {
        match &self.value {
            TokenValue::Word(word) => Some(word),
            _ => None,
        }
    }
}
