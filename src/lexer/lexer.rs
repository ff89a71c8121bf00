use std::rc::Rc;

use lazy_static::lazy_static;
use log::{debug, trace};
use regex::Regex;

use crate::{errors::errors::{Error, ErrorImpl}, Position, Span, MK_SPAN, MK_TOKEN};

use super::tokens::{Token, TokenKind, TokenValue, RESERVED_LOOKUP};

lazy_static! {
    static ref IDENTIFIER_PATTERN: Regex = Regex::new(r"^\p{Alphabetic}[\p{Alphabetic}\p{N}_]*").unwrap();
    static ref NUMBER_PATTERN: Regex = Regex::new(r"^[0-9.]+").unwrap();
}

#[derive(Clone)]
pub struct Lexer {
    tokens: Vec<Token>,
    source: String,
    /// Byte offset of `current_char`
    pos: usize,
    /// Character offset of `current_char`, used for positions
    char_pos: usize,
    current_char: Option<char>,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: &str, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            tokens: vec![],
            current_char: source.chars().next(),
            source: String::from(source),
            pos: 0,
            char_pos: 0,
            file: file_name,
        }
    }

    /// Moves one character forward. `current_char` becomes `None` at the end of the buffer.
    pub fn advance(&mut self) {
        if let Some(c) = self.current_char {
            self.pos += c.len_utf8();
            self.char_pos += 1;
        }
        self.current_char = self.source[self.pos..].chars().next();
    }

    pub fn advance_n(&mut self, n: usize) {
        for _ in 0..n {
            self.advance();
        }
    }

    pub fn current_char(&self) -> Option<char> {
        self.current_char
    }

    fn peek_char(&self) -> Option<char> {
        self.source[self.pos..].chars().nth(1)
    }

    pub fn position(&self) -> Position {
        Position(self.char_pos as u32, Rc::clone(&self.file))
    }

    pub fn at_eof(&self) -> bool {
        self.current_char.is_none()
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// Skips spaces, tabs and newlines. Newlines carry no meaning in the grammar.
    pub fn skip_whitespace(&mut self) {
        while let Some(c) = self.current_char {
            if !c.is_whitespace() {
                break;
            }
            self.advance();
        }
    }

    /// Consumes the longest match of `pattern` at the current position.
    fn take(&mut self, pattern: &Regex) -> String {
        let matched = pattern
            .find(&self.source[self.pos..])
            .map(|m| String::from(m.as_str()))
            .unwrap_or_default();
        self.advance_n(matched.chars().count());
        matched
    }

    /// Lexes a run of letters, digits and underscores. The result is always
    /// an `Identifier`; `token` reclassifies reserved words.
    pub fn identifier(&mut self) -> Token {
        let start = self.char_pos;
        let word = self.take(&IDENTIFIER_PATTERN);

        MK_TOKEN!(TokenKind::Identifier, TokenValue::Word(word), MK_SPAN!(start, self.char_pos, self.file))
    }

    /// Lexes a run of digits and dots. Any dot makes it a float literal.
    pub fn number(&mut self) -> Result<Token, Error> {
        let start = self.char_pos;
        let start_position = self.position();
        let text = self.take(&NUMBER_PATTERN);
        let span = MK_SPAN!(start, self.char_pos, self.file);

        let parsed = if text.contains('.') {
            text.parse::<f64>().ok().map(|value| (TokenKind::FloatNumber, TokenValue::Float(value)))
        } else {
            text.parse::<i64>().ok().map(|value| (TokenKind::Number, TokenValue::Int(value)))
        };

        match parsed {
            Some((kind, value)) => Ok(MK_TOKEN!(kind, value, span)),
            None => Err(Error::new(ErrorImpl::NumberParseError { token: text }, start_position)),
        }
    }

    fn symbol(&mut self, kind: TokenKind, text: &'static str) -> Token {
        let start = self.char_pos;
        self.advance_n(text.chars().count());

        MK_TOKEN!(kind, TokenValue::Word(String::from(text)), MK_SPAN!(start, self.char_pos, self.file))
    }

    fn classify(token: Token) -> Token {
        let reserved = token.word().and_then(|word| RESERVED_LOOKUP.get(word)).copied();

        match reserved {
            Some(kind) => Token { kind, ..token },
            None => token,
        }
    }

    /// Produces the next token, or `EOF` once the buffer is exhausted.
    pub fn token(&mut self) -> Result<Token, Error> {
        while let Some(c) = self.current_char {
            if c.is_whitespace() {
                self.skip_whitespace();
                continue;
            }

            if c.is_alphabetic() {
                let identifier = self.identifier();
                return Ok(Lexer::classify(identifier));
            }

            if c.is_ascii_digit() || c == '.' {
                return self.number();
            }

            let token = match c {
                '+' => self.symbol(TokenKind::Plus, "+"),
                '-' => self.symbol(TokenKind::Dash, "-"),
                '*' => self.symbol(TokenKind::Star, "*"),
                '/' => self.symbol(TokenKind::Slash, "/"),
                '=' if self.peek_char() == Some('=') => self.symbol(TokenKind::Equals, "=="),
                '=' => self.symbol(TokenKind::Assignment, "="),
                '!' if self.peek_char() == Some('=') => self.symbol(TokenKind::NotEquals, "!="),
                '<' => self.symbol(TokenKind::Less, "<"),
                '>' => self.symbol(TokenKind::Greater, ">"),
                '(' => self.symbol(TokenKind::OpenParen, "("),
                ')' => self.symbol(TokenKind::CloseParen, ")"),
                ',' => self.symbol(TokenKind::Comma, ","),
                ':' => self.symbol(TokenKind::Colon, ":"),
                '{' => self.symbol(TokenKind::OpenCurly, "{"),
                '}' => self.symbol(TokenKind::CloseCurly, "}"),
                // A lone `!` is not an operator
                _ => {
                    return Err(Error::new(
                        ErrorImpl::UnrecognisedToken { token: c.to_string() },
                        self.position(),
                    ))
                }
            };

            return Ok(token);
        }

        Ok(MK_TOKEN!(TokenKind::EOF, TokenValue::None, MK_SPAN!(self.char_pos, self.char_pos, self.file)))
    }
}

/// Tokenizes `source` into a list ending in exactly one `EOF` token.
///
/// `file` names the source in positions; it defaults to `"shell"`.
pub fn tokenize(source: &str, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file);

    loop {
        let token = lex.token()?;
        trace!("token {}", token);

        let is_eof = token.kind == TokenKind::EOF;
        lex.push(token);

        if is_eof {
            break;
        }
    }

    debug!("tokenized {} into {} tokens", lex.file, lex.tokens.len());
    Ok(lex.tokens)
}
