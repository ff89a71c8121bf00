use crate::Span;

use super::{
    expressions::{BinaryExpr, FactorExpr},
    statements::{AssignmentStmt, CallStmt, DeclarationStmt, IfStmt, WhileStmt},
    types::ValueType,
};

/// Statement
///
/// Every statement the grammar can produce. A program and every `{}` body is a `BlockStmt` of these.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Declaration(DeclarationStmt),
    Assignment(AssignmentStmt),
    If(IfStmt),
    While(WhileStmt),
    Call(CallStmt),
}

impl Stmt {
    /// Returns the span of the statement.
    pub fn get_span(&self) -> &Span {
        match self {
            Stmt::Declaration(stmt) => &stmt.span,
            Stmt::Assignment(stmt) => &stmt.span,
            Stmt::If(stmt) => &stmt.span,
            Stmt::While(stmt) => &stmt.span,
            Stmt::Call(stmt) => &stmt.span,
        }
    }
}

/// Expression
///
/// Parenthesised expressions have no node of their own; they parse to their contents.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Binary(BinaryExpr),
    Factor(FactorExpr),
}

impl Expr {
    /// The inferred type, or `None` when an operand could not be resolved.
    pub fn value_type(&self) -> Option<ValueType> {
        match self {
            Expr::Binary(expr) => expr.value_type(),
            Expr::Factor(expr) => expr.value_type(),
        }
    }

    /// Returns the span of the expression.
    pub fn get_span(&self) -> &Span {
        match self {
            Expr::Binary(expr) => &expr.span,
            Expr::Factor(expr) => &expr.span,
        }
    }
}

impl From<BinaryExpr> for Expr {
    fn from(expr: BinaryExpr) -> Self {
        Expr::Binary(expr)
    }
}

impl From<FactorExpr> for Expr {
    fn from(expr: FactorExpr) -> Self {
        Expr::Factor(expr)
    }
}
