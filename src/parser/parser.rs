//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the parsing entry
//! points. Statements are dispatched through a lookup table keyed on the
//! current token; expressions are parsed by recursive descent in
//! `expr.rs`. Scopes and types are checked while the tree is built, by the
//! [`TypeChecker`] the parser owns for the duration of one parse.

use std::collections::HashMap;

use log::debug;

use crate::{
    ast::statements::BlockStmt,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind, TokenValue},
    type_checker::{environment::SymbolTable, type_checker::TypeChecker},
    Position, Span, MK_TOKEN,
};

use super::{
    lookups::{create_token_lookups, StmtHandler, StmtLookup},
    stmt::parse_program,
};

/// What the right-hand side of a comparison is parsed as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComparisonRhs {
    /// A full expression, so `x + 1 == y + 2` compares two sums.
    #[default]
    Expression,
    /// A single term, so only `y` is compared in `x + 1 == y + 2`.
    Term,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParserOptions {
    pub comparison_rhs: ComparisonRhs,
}

/// The outcome of a parse that did not hit a fatal error.
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// The whole program
    pub ast: BlockStmt,
    /// Semantic errors in the order they were found
    pub errors: Vec<Error>,
    /// Every scope opened during the parse, closed ones included
    pub symbols: SymbolTable,
}

impl ParseResult {
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(Error::get_message).collect()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// The list of tokens to parse, always ending in EOF
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Scopes, declarations and collected semantic errors
    type_checker: TypeChecker,
    options: ParserOptions,
}

impl Parser {
    /// Creates a new Parser instance.
    ///
    /// An EOF token is appended if `tokens` does not already end with one.
    pub fn new(mut tokens: Vec<Token>, options: ParserOptions) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::EOF) {
            let end = tokens
                .last()
                .map(|token| token.span.end.clone())
                .unwrap_or_else(Position::null);
            tokens.push(MK_TOKEN!(
                TokenKind::EOF,
                TokenValue::None,
                Span {
                    start: end.clone(),
                    end
                }
            ));
        }

        Parser {
            tokens,
            pos: 0,
            stmt_lookup: HashMap::new(),
            type_checker: TypeChecker::new(),
            options,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Returns the kind of the token after the current one, EOF when there is none.
    pub fn peek(&self) -> TokenKind {
        self.tokens
            .get(self.pos + 1)
            .map(|token| token.kind)
            .unwrap_or(TokenKind::EOF)
    }

    /// Advances to the next token and returns the previous token.
    ///
    /// The parser never moves past the final EOF token.
    pub fn advance(&mut self) -> &Token {
        let index = self.pos;
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        &self.tokens[index]
    }

    /// Expects a token of the specified kind, with optional custom error.
    pub fn expect_error(&mut self, expected_kind: TokenKind, error: Option<Error>) -> Result<Token, Error> {
        let token = self.current_token();
        if token.kind != expected_kind {
            return Err(error.unwrap_or_else(|| {
                Error::new(
                    ErrorImpl::ExpectedToken {
                        expected: expected_kind.to_string(),
                        received: token.to_string(),
                    },
                    token.span.start.clone(),
                )
            }));
        }

        Ok(self.advance().clone())
    }

    /// Expects a token of the specified kind with default error message.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.expect_error(expected_kind, None)
    }

    /// Checks if the current token is not EOF.
    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::EOF
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    pub fn type_checker(&mut self) -> &mut TypeChecker {
        &mut self.type_checker
    }

    pub fn get_options(&self) -> &ParserOptions {
        &self.options
    }

    /// Returns the start of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token().span.start.clone()
    }

    /// Span from `start` to the end of the most recently consumed token.
    pub fn span_from(&self, start: Position) -> Span {
        let end = match self.pos {
            0 => self.current_token().span.start.clone(),
            pos => self.tokens[pos - 1].span.end.clone(),
        };

        Span { start, end }
    }
}

/// Parses a stream of tokens into an Abstract Syntax Tree using the default options.
///
/// # Returns
///
/// `Err` on the first syntax error. Otherwise the program's root block,
/// every semantic error found, and the symbol table that was built.
pub fn parse(tokens: Vec<Token>) -> Result<ParseResult, Error> {
    parse_with_options(tokens, ParserOptions::default())
}

pub fn parse_with_options(tokens: Vec<Token>, options: ParserOptions) -> Result<ParseResult, Error> {
    let mut parser = Parser::new(tokens, options);
    create_token_lookups(&mut parser);

    let ast = parse_program(&mut parser)?;
    let (symbols, errors) = parser.type_checker.finish();

    debug!(
        "parsed {} top-level statements with {} semantic errors across {} scopes",
        ast.len(),
        errors.len(),
        symbols.environments().len()
    );

    Ok(ParseResult { ast, errors, symbols })
}
