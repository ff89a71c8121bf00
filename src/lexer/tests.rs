//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Numeric literals (integers and floats)
//! - Operators and punctuation
//! - Error cases

use proptest::prelude::*;

use super::{lexer::{tokenize, Lexer}, tokens::{TokenKind, TokenValue}};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source, Some("test.lang".to_string()))
        .unwrap()
        .into_iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn test_tokenize_keywords() {
    assert_eq!(
        kinds("if else while int float"),
        vec![
            TokenKind::If,
            TokenKind::Else,
            TokenKind::While,
            TokenKind::Int,
            TokenKind::Float,
            TokenKind::EOF
        ]
    );
}

#[test]
fn test_keyword_prefixes_are_identifiers() {
    let tokens = tokenize("iff integer floats while_x", None).unwrap();

    for token in &tokens[..4] {
        assert_eq!(token.kind, TokenKind::Identifier);
    }
    assert_eq!(tokens[3].value, TokenValue::Word("while_x".to_string()));
}

#[test]
fn test_tokenize_identifiers() {
    let source = "foo bar baz_123 CamelCase";
    let tokens = tokenize(source, Some("test.lang".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, TokenValue::Word("foo".to_string()));
    assert_eq!(tokens[1].value, TokenValue::Word("bar".to_string()));
    assert_eq!(tokens[2].value, TokenValue::Word("baz_123".to_string()));
    assert_eq!(tokens[3].value, TokenValue::Word("CamelCase".to_string()));
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_leading_underscore_is_illegal() {
    let error = tokenize("_x", None).unwrap_err();

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_position().0, 0);
}

#[test]
fn test_tokenize_numbers() {
    let tokens = tokenize("42 3.14 0 100.5 7. .5", None).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, TokenValue::Int(42));
    assert_eq!(tokens[1].kind, TokenKind::FloatNumber);
    assert_eq!(tokens[1].value, TokenValue::Float(3.14));
    assert_eq!(tokens[2].value, TokenValue::Int(0));
    assert_eq!(tokens[3].value, TokenValue::Float(100.5));
    assert_eq!(tokens[4].kind, TokenKind::FloatNumber);
    assert_eq!(tokens[4].value, TokenValue::Float(7.0));
    assert_eq!(tokens[5].value, TokenValue::Float(0.5));
    assert_eq!(tokens[6].kind, TokenKind::EOF);
}

#[test]
fn test_number_followed_by_identifier() {
    assert_eq!(
        kinds("12ab"),
        vec![TokenKind::Number, TokenKind::Identifier, TokenKind::EOF]
    );
}

#[test]
fn test_malformed_numbers() {
    let error = tokenize("x = 1.2.3", None).unwrap_err();
    assert_eq!(error.get_error_name(), "NumberParseError");
    assert_eq!(error.get_position().0, 4);

    let error = tokenize(".", None).unwrap_err();
    assert_eq!(error.get_error_name(), "NumberParseError");

    let error = tokenize("99999999999999999999", None).unwrap_err();
    assert_eq!(error.get_error_name(), "NumberParseError");
}

#[test]
fn test_tokenize_operators() {
    assert_eq!(
        kinds("+ - * / == != < > ="),
        vec![
            TokenKind::Plus,
            TokenKind::Dash,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Equals,
            TokenKind::NotEquals,
            TokenKind::Less,
            TokenKind::Greater,
            TokenKind::Assignment,
            TokenKind::EOF
        ]
    );
}

#[test]
fn test_adjacent_equals() {
    // `===` is `==` then `=`
    assert_eq!(
        kinds("x===y"),
        vec![
            TokenKind::Identifier,
            TokenKind::Equals,
            TokenKind::Assignment,
            TokenKind::Identifier,
            TokenKind::EOF
        ]
    );
}

#[test]
fn test_no_compound_comparisons() {
    assert_eq!(
        kinds("<="),
        vec![TokenKind::Less, TokenKind::Assignment, TokenKind::EOF]
    );
}

#[test]
fn test_tokenize_punctuation() {
    assert_eq!(
        kinds("( ) { } , :"),
        vec![
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            TokenKind::Comma,
            TokenKind::Colon,
            TokenKind::EOF
        ]
    );
}

#[test]
fn test_lone_bang_is_illegal() {
    let error = tokenize("x = !y", None).unwrap_err();

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_position().0, 4);
    assert_eq!(error.get_message(), "illegal character: \"!\"");
}

#[test]
fn test_tokenize_unrecognized_token() {
    let error = tokenize("int x = 5 @", Some("test.lang".to_string())).unwrap_err();

    assert_eq!(error.get_position().0, 10);
    assert_eq!(error.get_position().1.as_str(), "test.lang");
}

#[test]
fn test_position_counts_characters() {
    let error = tokenize("é ü #", None).unwrap_err();
    assert_eq!(error.get_position().0, 4);
}

#[test]
fn test_tokenize_simple_program() {
    let tokens = tokenize("int x = 42", None).unwrap();

    assert_eq!(tokens.len(), 5); // int, x, =, 42, EOF
    assert_eq!(tokens[0].kind, TokenKind::Int);
    assert_eq!(tokens[0].value, TokenValue::Word("int".to_string()));
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].kind, TokenKind::Assignment);
    assert_eq!(tokens[3].value, TokenValue::Int(42));
    assert_eq!(tokens[4].kind, TokenKind::EOF);
    assert_eq!(tokens[4].value, TokenValue::None);
}

#[test]
fn test_token_spans() {
    let tokens = tokenize("x == 10", None).unwrap();

    assert_eq!(tokens[1].span.start.0, 2);
    assert_eq!(tokens[1].span.end.0, 4);
    assert_eq!(tokens[2].span.start.0, 5);
    assert_eq!(tokens[2].span.end.0, 7);
    assert_eq!(tokens[3].span.start.0, 7);
    assert_eq!(tokens[0].span.start.1.as_str(), "shell");
}

#[test]
fn test_tokenize_whitespace_handling() {
    assert_eq!(
        kinds("  \tint \r\n  x\n=\n\n42  \n"),
        vec![
            TokenKind::Int,
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::Number,
            TokenKind::EOF
        ]
    );
}

#[test]
fn test_empty_source() {
    assert_eq!(kinds(""), vec![TokenKind::EOF]);
    assert_eq!(kinds(" \n\t "), vec![TokenKind::EOF]);
}

#[test]
fn test_lexer_primitives() {
    let mut lexer = Lexer::new("  ab1_c 12.5", None);

    lexer.skip_whitespace();
    assert_eq!(lexer.current_char(), Some('a'));

    let identifier = lexer.identifier();
    assert_eq!(identifier.value, TokenValue::Word("ab1_c".to_string()));

    lexer.skip_whitespace();
    let number = lexer.number().unwrap();
    assert_eq!(number.kind, TokenKind::FloatNumber);
    assert!(lexer.at_eof());

    lexer.advance();
    assert_eq!(lexer.current_char(), None);
    assert_eq!(lexer.position().0, 12);
}

#[test]
fn test_tokenize_mixed_expression() {
    assert_eq!(
        kinds("x + 5 * (y - 3)"),
        vec![
            TokenKind::Identifier,
            TokenKind::Plus,
            TokenKind::Number,
            TokenKind::Star,
            TokenKind::OpenParen,
            TokenKind::Identifier,
            TokenKind::Dash,
            TokenKind::Number,
            TokenKind::CloseParen,
            TokenKind::EOF
        ]
    );
}

proptest! {
    #[test]
    fn integer_literals_keep_their_value(value in 0i64..=i64::MAX) {
        let tokens = tokenize(&value.to_string(), None).unwrap();

        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(tokens[0].kind, TokenKind::Number);
        prop_assert_eq!(&tokens[0].value, &TokenValue::Int(value));
    }

    #[test]
    fn float_literals_keep_their_value(src in "[0-9]{1,8}\\.[0-9]{1,8}") {
        let tokens = tokenize(&src, None).unwrap();
        let expected: f64 = src.parse().unwrap();

        prop_assert_eq!(tokens[0].kind, TokenKind::FloatNumber);
        prop_assert_eq!(&tokens[0].value, &TokenValue::Float(expected));
    }

    #[test]
    fn exactly_one_eof(src in "[a-z0-9 \\n\\t+*/=<>(){},:-]{0,256}") {
        if let Ok(tokens) = tokenize(&src, None) {
            let eofs = tokens.iter().filter(|token| token.kind == TokenKind::EOF).count();

            prop_assert_eq!(eofs, 1);
            prop_assert_eq!(tokens.last().map(|token| token.kind), Some(TokenKind::EOF));
        }
    }

    #[test]
    fn fuzz(src in ".{0,1024}") {
        let _ = tokenize(&src, None);
    }
}
