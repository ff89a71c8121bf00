use std::slice::Iter;

use crate::Span;

use super::{ast::{Expr, Stmt}, types::ValueType};

/// An ordered list of statements: a whole program or a `{}` body.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockStmt {
    pub body: Vec<Stmt>,
    pub span: Span,
}

impl BlockStmt {
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.body.iter()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// `int x = <expr>` or `float x = <expr>`
#[derive(Debug, Clone, PartialEq)]
pub struct DeclarationStmt {
    pub declared_type: ValueType,
    pub identifier: String,
    pub value: Expr,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentStmt {
    pub identifier: String,
    pub value: Expr,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub condition: Expr,
    pub then_body: BlockStmt,
    pub else_body: Option<BlockStmt>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileStmt {
    pub condition: Expr,
    pub body: BlockStmt,
    pub span: Span,
}

/// A call to a named function. There are no function declarations, so
/// neither arity nor argument types are checked.
#[derive(Debug, Clone, PartialEq)]
pub struct CallStmt {
    pub callee: String,
    pub arguments: Vec<Expr>,
    pub span: Span,
}
