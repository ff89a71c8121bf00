//! Value types known to the front end.
//!
//! Only `int` and `float` can be declared. `bool` exists solely as the
//! result type of a comparison.

use std::fmt::Display;

use crate::lexer::tokens::TokenKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Int,
    Float,
    Bool,
}

impl ValueType {
    /// Maps a type keyword to the type it declares.
    pub fn from_keyword(kind: TokenKind) -> Option<ValueType> {
        match kind {
            TokenKind::Int => Some(ValueType::Int),
            TokenKind::Float => Some(ValueType::Float),
            _ => None,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, ValueType::Int | ValueType::Float)
    }
}

impl Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueType::Int => write!(f, "int"),
            ValueType::Float => write!(f, "float"),
            ValueType::Bool => write!(f, "bool"),
        }
    }
}
