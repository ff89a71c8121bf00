//! Unit tests for error handling.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;
use std::rc::Rc;

fn at(offset: u32) -> Position {
    Position(offset, Rc::new("test.lang".to_string()))
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        at(10),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert!(!error.is_semantic());
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "Identifier (x)".to_string(),
        },
        at(42),
    );

    assert_eq!(error.get_position().0, 42);
    assert_eq!(error.get_position().1.as_str(), "test.lang");
}

#[test]
fn test_error_display_includes_position() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "$".to_string(),
        },
        at(7),
    );

    assert_eq!(error.to_string(), "illegal character: \"$\" (at test.lang:7)");
}

#[test]
fn test_semantic_messages() {
    let declared = Error::new(
        ErrorImpl::VariableAlreadyDeclared {
            variable: "x".to_string(),
        },
        at(0),
    );
    let undeclared = Error::new(
        ErrorImpl::VariableNotDeclared {
            variable: "y".to_string(),
        },
        at(0),
    );
    let mismatch = Error::new(
        ErrorImpl::TypeMatchError {
            expected: "int".to_string(),
            received: "float".to_string(),
        },
        at(0),
    );

    assert_eq!(
        declared.get_message(),
        "Variable x has already been declared in the current scope"
    );
    assert_eq!(
        undeclared.get_message(),
        "Variable y has not been declared in the current or any enclosing scopes"
    );
    assert_eq!(mismatch.get_message(), "Type Mismatch between int and float");
    assert!(matches!(
        mismatch.get_kind(),
        ErrorImpl::TypeMatchError { expected, received } if expected == "int" && received == "float"
    ));

    assert!(declared.is_semantic());
    assert!(undeclared.is_semantic());
    assert!(mismatch.is_semantic());
}

#[test]
fn test_fatal_errors_are_not_semantic() {
    let fatal = [
        ErrorImpl::NumberParseError {
            token: "1.2.3".to_string(),
        },
        ErrorImpl::UnexpectedToken {
            token: "}".to_string(),
        },
        ErrorImpl::ExpectedToken {
            expected: "OpenCurly".to_string(),
            received: "EOF".to_string(),
        },
        ErrorImpl::UnterminatedBlock,
    ];

    for kind in fatal {
        assert!(!Error::new(kind, at(0)).is_semantic());
    }
}

#[test]
fn test_unterminated_block_error() {
    let error = Error::new(ErrorImpl::UnterminatedBlock, at(3));

    assert_eq!(error.get_error_name(), "UnterminatedBlock");
    assert_eq!(
        error.get_message(),
        "unterminated block: reached end of input before `}`"
    );
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        at(0),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::ExpectedToken {
            expected: "CloseParen".to_string(),
            received: "EOF".to_string(),
        },
        at(0),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "Expected `CloseParen`, received `EOF`"),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}
