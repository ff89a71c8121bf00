#![allow(clippy::module_inception)]

use std::{fmt::Display, rc::Rc};

use crate::{errors::errors::Error, lexer::lexer::tokenize, parser::parser::{parse, ParseResult}};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod type_checker;

/// An absolute character offset into a source buffer, tagged with the name of that source.
#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.1, self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Resolves a character offset to `(line number, line text, column)`.
///
/// Line numbers start at 1, columns at 0. Returns `None` when the offset
/// lies past the end of `source`.
pub fn get_line_at_position(source: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;
    let mut start = 0;

    for (index, line) in source.split_inclusive('\n').enumerate() {
        let end = start + line.chars().count();

        if (start..end).contains(&pos) {
            return Some((index + 1, line.to_string(), pos - start));
        }

        start = end;
    }

    None
}

/// Runs the whole front end over `source`: tokenizing, then parsing with the default options.
///
/// Lexical and syntax errors come back as `Err`; semantic errors are
/// collected on the returned [`ParseResult`].
pub fn analyze(source: &str, file: Option<String>) -> Result<ParseResult, Error> {
    let tokens = tokenize(source, file)?;
    parse(tokens)
}
