use thiserror::Error;

use super::token::PathToken;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LexError {
    #[error("Invalid number at position {0}: {1}")]
    InvalidNumber(usize, String),
    #[error("Unexpected character '{1}' at position {0}")]
    UnexpectedChar(usize, char),
}

/// Lexer for raw SVG path data (`"M10 20L30,40"`).
///
/// Produces the flat letter/number token stream the runner consumes. Commas
/// and whitespace separate tokens; a sign or a second decimal point also
/// terminates the number before it, so `"1.5.5"` and `"10-20"` each lex as
/// two numbers.
pub struct PathLexer {
    input: Vec<char>,
    pos: usize,
}

impl PathLexer {
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            pos: 0,
        }
    }

    pub fn tokenize(&mut self) -> Result<Vec<PathToken>, LexError> {
        let mut tokens = Vec::new();

        loop {
            self.skip_separators();
            if self.is_eof() {
                break;
            }

            let ch = self.peek();
            if ch.is_ascii_alphabetic() {
                tokens.push(PathToken::Letter(ch));
                self.advance();
            } else if ch.is_ascii_digit() || ch == '.' || ch == '+' || ch == '-' {
                tokens.push(PathToken::Number(self.lex_number()?));
            } else {
                return Err(LexError::UnexpectedChar(self.pos, ch));
            }
        }

        Ok(tokens)
    }

    fn lex_number(&mut self) -> Result<f64, LexError> {
        let start = self.pos;
        let mut s = String::new();

        if self.peek() == '+' || self.peek() == '-' {
            s.push(self.peek());
            self.advance();
        }

        while !self.is_eof() && self.peek().is_ascii_digit() {
            s.push(self.peek());
            self.advance();
        }

        if !self.is_eof() && self.peek() == '.' {
            s.push('.');
            self.advance();
            while !self.is_eof() && self.peek().is_ascii_digit() {
                s.push(self.peek());
                self.advance();
            }
        }

        // Exponent part; 'e'/'E' are not path commands so this never
        // swallows a following letter token.
        if !self.is_eof() && (self.peek() == 'e' || self.peek() == 'E') {
            s.push('e');
            self.advance();
            if !self.is_eof() && (self.peek() == '+' || self.peek() == '-') {
                s.push(self.peek());
                self.advance();
            }
            if self.is_eof() || !self.peek().is_ascii_digit() {
                return Err(LexError::InvalidNumber(start, s));
            }
            while !self.is_eof() && self.peek().is_ascii_digit() {
                s.push(self.peek());
                self.advance();
            }
        }

        s.parse::<f64>()
            .map_err(|_| LexError::InvalidNumber(start, s))
    }

    fn skip_separators(&mut self) {
        while !self.is_eof() && (self.peek().is_whitespace() || self.peek() == ',') {
            self.advance();
        }
    }

    fn peek(&self) -> char {
        if self.pos < self.input.len() {
            self.input[self.pos]
        } else {
            '\0'
        }
    }

    fn advance(&mut self) {
        if self.pos < self.input.len() {
            self.pos += 1;
        }
    }

    fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }
}
