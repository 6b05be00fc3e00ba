//! Forward-only character cursor over the input text.
//!
//! Whitespace between tokens is skipped automatically. Every read either
//! consumes a complete token or leaves the cursor where it was, which gives
//! the grammar one token of lookahead without an explicit unget.

/// 1-based position of the next unread character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

/// Cursor over the source text of one parse pass
#[derive(Debug, Clone)]
pub struct Cursor<'src> {
    source: &'src str,
    /// Current byte offset in source.
    position: usize,
    /// Current line number (1-based).
    line: usize,
    /// Current column number (1-based).
    column: usize,
}

impl<'src> Cursor<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Location of the next token, after skipping whitespace
    pub fn location(&mut self) -> Location {
        self.skip_whitespace();
        self.here()
    }

    /// True once only whitespace remains
    pub fn at_end(&mut self) -> bool {
        self.skip_whitespace();
        self.rest().is_empty()
    }

    /// Next non-whitespace character without consuming it
    pub fn peek(&mut self) -> Option<char> {
        self.skip_whitespace();
        self.rest().chars().next()
    }

    /// Consume `expected` if it is the next non-whitespace character
    pub fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Read a run of ASCII letters (keywords and month codes)
    pub fn read_word(&mut self) -> Option<&'src str> {
        self.skip_whitespace();
        let start = self.position;
        while self.rest().starts_with(|c: char| c.is_ascii_alphabetic()) {
            self.advance();
        }
        let source = self.source;
        let end = self.position;
        (end > start).then(|| &source[start..end])
    }

    /// Read an optionally signed decimal integer
    pub fn read_int(&mut self) -> Option<i64> {
        self.skip_whitespace();
        let saved = self.clone();
        let start = self.position;

        self.eat_sign();
        if self.eat_digits() == 0 {
            *self = saved;
            return None;
        }

        let lexeme = &self.source[start..self.position];
        match lexeme.parse::<i64>() {
            Ok(value) => Some(value),
            Err(_) => {
                *self = saved;
                None
            }
        }
    }

    /// Read a decimal floating point number: sign, digits, optional
    /// fraction, optional exponent
    pub fn read_float(&mut self) -> Option<f64> {
        self.skip_whitespace();
        let saved = self.clone();
        let start = self.position;

        self.eat_sign();
        let mut digits = self.eat_digits();
        if self.rest().starts_with('.') {
            self.advance();
            digits += self.eat_digits();
        }
        if digits == 0 {
            *self = saved;
            return None;
        }

        if self.rest().starts_with(['e', 'E']) {
            let before_exponent = self.clone();
            self.advance();
            self.eat_sign();
            if self.eat_digits() == 0 {
                *self = before_exponent;
            }
        }

        let lexeme = &self.source[start..self.position];
        match lexeme.parse::<f64>() {
            Ok(value) => Some(value),
            Err(_) => {
                *self = saved;
                None
            }
        }
    }

    /// Unconsumed input starting at the next token, for diagnostics
    pub fn remaining(&mut self) -> &'src str {
        self.skip_whitespace();
        self.rest()
    }

    fn rest(&self) -> &'src str {
        &self.source[self.position..]
    }

    fn here(&self) -> Location {
        Location {
            line: self.line,
            column: self.column,
        }
    }

    fn skip_whitespace(&mut self) {
        while self.rest().starts_with(char::is_whitespace) {
            self.advance();
        }
    }

    fn eat_sign(&mut self) {
        if self.rest().starts_with(['+', '-']) {
            self.advance();
        }
    }

    fn eat_digits(&mut self) -> usize {
        let mut count = 0;
        while self.rest().starts_with(|c: char| c.is_ascii_digit()) {
            self.advance();
            count += 1;
        }
        count
    }

    fn advance(&mut self) {
        if let Some(c) = self.rest().chars().next() {
            self.position += c.len_utf8();
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }
}
