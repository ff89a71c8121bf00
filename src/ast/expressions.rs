use std::fmt::Display;

use crate::{lexer::tokens::TokenKind, Span};

use super::{ast::Expr, types::ValueType};

/// The eight binary operators: arithmetic and comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Plus,
    Minus,
    Multiply,
    Divide,
    Equals,
    NotEquals,
    Less,
    Greater,
}

impl BinaryOperator {
    pub fn from_token(kind: TokenKind) -> Option<BinaryOperator> {
        match kind {
            TokenKind::Plus => Some(BinaryOperator::Plus),
            TokenKind::Dash => Some(BinaryOperator::Minus),
            TokenKind::Star => Some(BinaryOperator::Multiply),
            TokenKind::Slash => Some(BinaryOperator::Divide),
            TokenKind::Equals => Some(BinaryOperator::Equals),
            TokenKind::NotEquals => Some(BinaryOperator::NotEquals),
            TokenKind::Less => Some(BinaryOperator::Less),
            TokenKind::Greater => Some(BinaryOperator::Greater),
            _ => None,
        }
    }

    pub fn is_comparison(&self) -> bool {
        matches!(
            self,
            BinaryOperator::Equals | BinaryOperator::NotEquals | BinaryOperator::Less | BinaryOperator::Greater
        )
    }
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            BinaryOperator::Plus => "+",
            BinaryOperator::Minus => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::Equals => "==",
            BinaryOperator::NotEquals => "!=",
            BinaryOperator::Less => "<",
            BinaryOperator::Greater => ">",
        };
        write!(f, "{}", symbol)
    }
}

// COMPLEX

/// Binary Expression
/// Represents an arithmetic operation or a comparison in the AST.
///
/// Arithmetic takes the type of its left operand; comparisons are `bool`.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub operator: BinaryOperator,
    pub right: Box<Expr>,
    pub span: Span,
    value_type: Option<ValueType>,
}

impl BinaryExpr {
    pub fn new(left: Expr, operator: BinaryOperator, right: Expr) -> Self {
        let value_type = if operator.is_comparison() {
            Some(ValueType::Bool)
        } else {
            left.value_type()
        };

        BinaryExpr {
            span: Span {
                start: left.get_span().start.clone(),
                end: right.get_span().end.clone(),
            },
            left: Box::new(left),
            operator,
            right: Box::new(right),
            value_type,
        }
    }

    pub fn value_type(&self) -> Option<ValueType> {
        self.value_type
    }
}

// LITERALS

/// What a factor stands for: a numeric literal or a variable reference.
#[derive(Debug, Clone, PartialEq)]
pub enum FactorValue {
    Int(i64),
    Float(f64),
    Symbol(String),
}

/// Factor Expression
/// The smallest unit of an expression: a literal or an identifier.
///
/// An identifier that resolved to no declaration has no type.
#[derive(Debug, Clone, PartialEq)]
pub struct FactorExpr {
    pub value: FactorValue,
    pub span: Span,
    value_type: Option<ValueType>,
}

impl FactorExpr {
    pub fn int(value: i64, span: Span) -> Self {
        FactorExpr {
            value: FactorValue::Int(value),
            span,
            value_type: Some(ValueType::Int),
        }
    }

    pub fn float(value: f64, span: Span) -> Self {
        FactorExpr {
            value: FactorValue::Float(value),
            span,
            value_type: Some(ValueType::Float),
        }
    }

    pub fn symbol(name: String, value_type: Option<ValueType>, span: Span) -> Self {
        FactorExpr {
            value: FactorValue::Symbol(name),
            span,
            value_type,
        }
    }

    pub fn value_type(&self) -> Option<ValueType> {
        self.value_type
    }
}
