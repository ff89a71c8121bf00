//! Scope tracking and type checking.
//!
//! The parser drives this module while it builds the AST:
//!
//! - Opening and closing scopes for `if`/`while` bodies
//! - Registering declarations and detecting redeclaration in one scope
//! - Resolving identifiers innermost scope first
//! - Detecting `int`/`float` mismatches
//!
//! Problems are collected as errors instead of stopping the parse.

pub mod environment;
pub mod type_checker;
