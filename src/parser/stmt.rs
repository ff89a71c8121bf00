use log::trace;

use crate::{
    ast::{
        ast::Stmt,
        statements::{AssignmentStmt, BlockStmt, CallStmt, DeclarationStmt, IfStmt, WhileStmt},
        types::ValueType,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    Position,
};

use super::{
    expr::{parse_arg_list, parse_boolean_expr, parse_expr},
    parser::Parser,
};

/// Parses statements until EOF into the program's root block.
pub fn parse_program(parser: &mut Parser) -> Result<BlockStmt, Error> {
    let start = parser.get_position();

    let mut body = vec![];
    while parser.has_tokens() {
        body.push(parse_stmt(parser)?);
    }

    Ok(BlockStmt {
        body,
        span: parser.span_from(start),
    })
}

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let kind = parser.current_token_kind();
    trace!("statement starting with {} at {}", kind, parser.get_position());

    let handler = parser.get_stmt_lookup().get(&kind).copied();
    match handler {
        Some(handler) => handler(parser),
        None => Err(Error::new(
            ErrorImpl::UnexpectedToken {
                token: parser.current_token().to_string(),
            },
            parser.get_position(),
        )),
    }
}

/// `int x = <expr>` / `float x = <expr>`
///
/// The variable is registered even when the initializer's type does not match.
pub fn parse_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start_token = parser.advance().clone();
    let declared_type = ValueType::from_keyword(start_token.kind).ok_or_else(|| {
        Error::new(
            ErrorImpl::UnexpectedTokenDetailed {
                token: start_token.to_string(),
                message: String::from("expected `int` or `float`"),
            },
            start_token.span.start.clone(),
        )
    })?;

    let error = Error::new(
        ErrorImpl::UnexpectedTokenDetailed {
            token: parser.current_token().to_string(),
            message: String::from("expected identifier during variable declaration"),
        },
        parser.get_position(),
    );
    let name_token = parser.expect_error(TokenKind::Identifier, Some(error))?;
    let identifier = name_token.value.to_string();

    parser
        .type_checker()
        .check_var_declared(&identifier, name_token.span.start.clone());

    parser.expect(TokenKind::Assignment)?;
    let value = parse_expr(parser)?;

    let value_position = value.get_span().start.clone();
    let checker = parser.type_checker();
    checker.check_type_match(Some(declared_type), value.value_type(), value_position);
    checker.add_variable(identifier.clone(), declared_type);

    Ok(Stmt::Declaration(DeclarationStmt {
        declared_type,
        identifier,
        value,
        span: parser.span_from(start_token.span.start),
    }))
}

/// An identifier starts either an assignment or a call; the token after it decides.
pub fn parse_identifier_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    match parser.peek() {
        TokenKind::Assignment => parse_assign_stmt(parser),
        TokenKind::OpenParen => parse_call_stmt(parser),
        _ => Err(Error::new(
            ErrorImpl::UnexpectedTokenDetailed {
                token: parser.current_token().to_string(),
                message: String::from("expected `=` or `(` after identifier"),
            },
            parser.get_position(),
        )),
    }
}

pub fn parse_assign_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let name_token = parser.expect(TokenKind::Identifier)?;
    let identifier = name_token.value.to_string();

    parser
        .type_checker()
        .check_var_use(&identifier, name_token.span.start.clone());

    parser.expect(TokenKind::Assignment)?;
    let value = parse_expr(parser)?;

    let value_position = value.get_span().start.clone();
    let checker = parser.type_checker();
    let var_type = checker.get_variable_type(&identifier);
    checker.check_type_match(var_type, value.value_type(), value_position);

    Ok(Stmt::Assignment(AssignmentStmt {
        identifier,
        value,
        span: parser.span_from(name_token.span.start),
    }))
}

/// `name(arg, ...)`
pub fn parse_call_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let name_token = parser.expect(TokenKind::Identifier)?;

    parser.expect(TokenKind::OpenParen)?;
    let arguments = parse_arg_list(parser)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(Stmt::Call(CallStmt {
        callee: name_token.value.to_string(),
        arguments,
        span: parser.span_from(name_token.span.start),
    }))
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start.clone();

    let condition = parse_boolean_expr(parser)?;
    let then_body = parse_scoped_block(parser)?;

    let else_body = if parser.current_token_kind() == TokenKind::Else {
        parser.advance();
        Some(parse_scoped_block(parser)?)
    } else {
        None
    };

    Ok(Stmt::If(IfStmt {
        condition,
        then_body,
        else_body,
        span: parser.span_from(start),
    }))
}

pub fn parse_while_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start.clone();

    let condition = parse_boolean_expr(parser)?;
    let body = parse_scoped_block(parser)?;

    Ok(Stmt::While(WhileStmt {
        condition,
        body,
        span: parser.span_from(start),
    }))
}

/// `{ ... }` parsed inside a fresh scope that is closed again afterwards.
pub fn parse_scoped_block(parser: &mut Parser) -> Result<BlockStmt, Error> {
    let start = parser.expect(TokenKind::OpenCurly)?.span.start;

    parser.type_checker().enter_scope();
    let block = parse_block(parser, start)?;
    parser.type_checker().exit_scope();

    Ok(block)
}

/// Parses statements up to and including the closing `}`. The opening `{`
/// has already been consumed.
pub fn parse_block(parser: &mut Parser, start: Position) -> Result<BlockStmt, Error> {
    let mut body = Vec::new();

    loop {
        match parser.current_token_kind() {
            TokenKind::CloseCurly => break,
            TokenKind::EOF => {
                return Err(Error::new(ErrorImpl::UnterminatedBlock, parser.get_position()))
            }
            _ => body.push(parse_stmt(parser)?),
        }
    }

    parser.expect(TokenKind::CloseCurly)?;

    Ok(BlockStmt {
        body,
        span: parser.span_from(start),
    })
}
