use crate::{
    ast::{
        ast::Expr,
        expressions::{BinaryExpr, BinaryOperator, FactorExpr},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{TokenKind, TokenValue},
    Position,
};

use super::parser::{ComparisonRhs, Parser};

const ADDITIVE: [TokenKind; 2] = [TokenKind::Plus, TokenKind::Dash];
const MULTIPLICATIVE: [TokenKind; 2] = [TokenKind::Star, TokenKind::Slash];
const COMPARISON: [TokenKind; 4] = [
    TokenKind::Equals,
    TokenKind::NotEquals,
    TokenKind::Less,
    TokenKind::Greater,
];

/// Consumes the current token if it is one of `kinds`, returning its operator and position.
fn match_operator(parser: &mut Parser, kinds: &[TokenKind]) -> Option<(BinaryOperator, Position)> {
    let token = parser.current_token();
    if !token.is_one_of_many(kinds) {
        return None;
    }

    let operator = BinaryOperator::from_token(token.kind)?;
    let position = token.span.start.clone();
    parser.advance();

    Some((operator, position))
}

/// Folds `next (op next)*` left-associatively, checking each pair of operands.
fn parse_binary_chain(
    parser: &mut Parser,
    kinds: &[TokenKind],
    next: fn(&mut Parser) -> Result<Expr, Error>,
) -> Result<Expr, Error> {
    let mut left = next(parser)?;

    while let Some((operator, position)) = match_operator(parser, kinds) {
        let right = next(parser)?;
        parser
            .type_checker()
            .check_type_match(left.value_type(), right.value_type(), position);
        left = Expr::from(BinaryExpr::new(left, operator, right));
    }

    Ok(left)
}

/// `term (("+" | "-") term)*`
pub fn parse_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parse_binary_chain(parser, &ADDITIVE, parse_term)
}

/// `factor (("*" | "/") factor)*`
pub fn parse_term(parser: &mut Parser) -> Result<Expr, Error> {
    parse_binary_chain(parser, &MULTIPLICATIVE, parse_factor)
}

/// An expression, optionally compared against a second operand.
///
/// Without a comparison operator the expression itself is the condition.
pub fn parse_boolean_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let left = parse_expr(parser)?;

    let Some((operator, position)) = match_operator(parser, &COMPARISON) else {
        return Ok(left);
    };

    let right = match parser.get_options().comparison_rhs {
        ComparisonRhs::Expression => parse_expr(parser)?,
        ComparisonRhs::Term => parse_term(parser)?,
    };

    parser
        .type_checker()
        .check_type_match(left.value_type(), right.value_type(), position);

    Ok(Expr::from(BinaryExpr::new(left, operator, right)))
}

pub fn parse_factor(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.current_token().clone();

    match (token.kind, &token.value) {
        (TokenKind::Number, TokenValue::Int(value)) => {
            parser.advance();
            Ok(Expr::from(FactorExpr::int(*value, token.span)))
        }
        (TokenKind::FloatNumber, TokenValue::Float(value)) => {
            parser.advance();
            Ok(Expr::from(FactorExpr::float(*value, token.span)))
        }
        (TokenKind::Identifier, _) => {
            let name = token.value.to_string();
            let checker = parser.type_checker();
            let value_type = checker.get_variable_type(&name);
            checker.check_var_use(&name, token.span.start.clone());

            parser.advance();
            Ok(Expr::from(FactorExpr::symbol(name, value_type, token.span)))
        }
        (TokenKind::OpenParen, _) => {
            parser.advance();
            let expr = parse_expr(parser)?;
            parser.expect(TokenKind::CloseParen)?;

            Ok(expr)
        }
        (TokenKind::Number | TokenKind::FloatNumber, _) => Err(Error::new(
            ErrorImpl::NumberParseError {
                token: token.to_string(),
            },
            token.span.start,
        )),
        _ => Err(Error::new(
            ErrorImpl::UnexpectedTokenDetailed {
                token: token.to_string(),
                message: String::from("expected a number, identifier or `(`"),
            },
            token.span.start,
        )),
    }
}

/// Comma-separated expressions up to, but not including, the closing `)`.
pub fn parse_arg_list(parser: &mut Parser) -> Result<Vec<Expr>, Error> {
    let mut args = vec![];

    if parser.current_token_kind() != TokenKind::CloseParen {
        args.push(parse_expr(parser)?);

        while parser.current_token_kind() == TokenKind::Comma {
            parser.advance();
            args.push(parse_expr(parser)?);
        }
    }

    Ok(args)
}
