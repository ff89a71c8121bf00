//! Error types and error handling for the front end.
//!
//! Two classes of error share one type:
//!
//! - Fatal errors (illegal characters, malformed numbers, grammar violations)
//!   abort tokenizing or parsing and are returned as `Err`
//! - Semantic errors (redeclaration, undeclared use, type mismatch) are
//!   collected by the type checker while parsing carries on

pub mod errors;

#[cfg(test)]
mod tests;
