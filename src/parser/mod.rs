//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive-descent parser that transforms a
//! list of tokens into an Abstract Syntax Tree. It handles:
//!
//! - Statement parsing (declarations, assignments, calls, `if`, `while`)
//! - Expression parsing with `*`/`/` binding tighter than `+`/`-`
//! - Scope tracking and type checking as each construct is built
//!
//! Syntax errors stop the parse; semantic errors are collected.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
