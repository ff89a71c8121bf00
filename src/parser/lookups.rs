use std::collections::HashMap;

use crate::{ast::ast::Stmt, errors::errors::Error, lexer::tokens::TokenKind};

use super::{parser::Parser, stmt::*};

pub type StmtHandler = fn(&mut Parser) -> Result<Stmt, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Declarations
    parser.stmt(TokenKind::Int, parse_decl_stmt);
    parser.stmt(TokenKind::Float, parse_decl_stmt);

    // Assignments and calls, told apart by the next token
    parser.stmt(TokenKind::Identifier, parse_identifier_stmt);

    // Control flow
    parser.stmt(TokenKind::If, parse_if_stmt);
    parser.stmt(TokenKind::While, parse_while_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
