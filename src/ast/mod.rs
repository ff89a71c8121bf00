/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The statement and expression enums every node is stored as
/// - expressions: Definitions for the expression node kinds
/// - statements: Definitions for the statement node kinds
/// - types: The value types attached to expressions and declarations
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod types;
