use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// An error raised anywhere in the front end, tagged with where it happened.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error} (at {position})")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// The message without position information.
    pub fn get_message(&self) -> String {
        self.internal_error.to_string()
    }

    /// Semantic errors are collected while parsing continues; every other kind aborts.
    pub fn is_semantic(&self) -> bool {
        matches!(
            self.internal_error,
            ErrorImpl::VariableAlreadyDeclared { .. }
                | ErrorImpl::VariableNotDeclared { .. }
                | ErrorImpl::TypeMatchError { .. }
        )
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedTokenDetailed { .. } => "UnexpectedTokenDetailed",
            ErrorImpl::ExpectedToken { .. } => "ExpectedToken",
            ErrorImpl::UnterminatedBlock => "UnterminatedBlock",
            ErrorImpl::VariableAlreadyDeclared { .. } => "VariableAlreadyDeclared",
            ErrorImpl::VariableNotDeclared { .. } => "VariableNotDeclared",
            ErrorImpl::TypeMatchError { .. } => "TypeMatchError",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, does it have more than one `.` or exceed the integer limit?",
                token
            )),
            ErrorImpl::UnexpectedToken { token } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`", token))
            }
            ErrorImpl::UnexpectedTokenDetailed { token, message } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`, {}", token, message))
            }
            ErrorImpl::ExpectedToken { expected, received } => ErrorTip::Suggestion(format!(
                "Expected `{}`, received `{}`",
                expected, received
            )),
            ErrorImpl::UnterminatedBlock => {
                ErrorTip::Suggestion(String::from("Did you forget a closing `}`?"))
            }
            ErrorImpl::VariableAlreadyDeclared { variable } => ErrorTip::Suggestion(format!(
                "Variable `{}` already declared, declare it in a nested block to shadow it",
                variable
            )),
            ErrorImpl::VariableNotDeclared { variable } => {
                ErrorTip::Suggestion(format!("Variable `{}` not declared", variable))
            }
            ErrorImpl::TypeMatchError { expected, received } => ErrorTip::Suggestion(format!(
                "Expected type `{}`, received `{}`",
                expected, received
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    // Lexical
    #[error("illegal character: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },

    // Syntax
    #[error("unexpected token: {token}")]
    UnexpectedToken { token: String },
    #[error("unexpected token ({message}): {token}")]
    UnexpectedTokenDetailed { token: String, message: String },
    #[error("expected token {expected}, but got {received}")]
    ExpectedToken { expected: String, received: String },
    #[error("unterminated block: reached end of input before `}}`")]
    UnterminatedBlock,

    // Semantic
    #[error("Variable {variable} has already been declared in the current scope")]
    VariableAlreadyDeclared { variable: String },
    #[error("Variable {variable} has not been declared in the current or any enclosing scopes")]
    VariableNotDeclared { variable: String },
    #[error("Type Mismatch between {expected} and {received}")]
    TypeMatchError { expected: String, received: String },
}
