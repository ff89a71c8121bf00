//! Lexical analysis module for the front end.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a finite list of tokens for parsing. It handles:
//!
//! - Recognition of the five keywords, identifiers and numeric literals
//! - One- and two-character operators and punctuation
//! - Token position tracking for error reporting
//! - Whitespace (including newlines) skipping

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
