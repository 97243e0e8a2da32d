use std::{collections::VecDeque, rc::Rc};

use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

use crate::{Position, MK_TOKEN};

use super::tokens::Token;

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"^\s+").unwrap();
    static ref WORD: Regex = Regex::new(r"^[A-Za-z0-9_]+").unwrap();
}

/// Lazy, peekable tokenizer.
///
/// Tokens are scanned on demand. Only the tokens that have been peeked but
/// not yet consumed are buffered, so memory use does not grow with the
/// length of the input.
#[derive(Debug, Clone)]
pub struct Scanner<'src> {
    source: &'src str,
    /// Byte offset of the first character that has not been scanned yet
    pos: usize,
    file: Rc<String>,
    lookahead: VecDeque<Token<'src>>,
}

impl<'src> Scanner<'src> {
    pub fn new(source: &'src str, file: Option<String>) -> Scanner<'src> {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Scanner {
            source,
            pos: 0,
            file: file_name,
            lookahead: VecDeque::new(),
        }
    }

    /// Returns the token `offset` places ahead without consuming anything.
    ///
    /// `peek(0)` is the token the next `consume` will return. `None` means
    /// the input ends before that token.
    pub fn peek(&mut self, offset: usize) -> Option<&Token<'src>> {
        while self.lookahead.len() <= offset {
            let token = self.scan_next_token()?;
            self.lookahead.push_back(token);
        }

        self.lookahead.get(offset)
    }

    /// Returns the token `peek(0)` reports and moves past it.
    pub fn consume(&mut self) -> Option<Token<'src>> {
        match self.lookahead.pop_front() {
            Some(token) => Some(token),
            None => self.scan_next_token(),
        }
    }

    /// Position of the next unconsumed token, or of the end of the input.
    pub fn position(&self) -> Position {
        match self.lookahead.front() {
            Some(token) => token.span.start.clone(),
            None => {
                let skipped = WHITESPACE.find(self.remainder()).map_or(0, |m| m.end());
                Position(self.pos + skipped, Rc::clone(&self.file))
            }
        }
    }

    fn remainder(&self) -> &'src str {
        let source = self.source;
        &source[self.pos..]
    }

    fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    fn scan_next_token(&mut self) -> Option<Token<'src>> {
        if let Some(skipped) = WHITESPACE.find(self.remainder()) {
            self.advance_n(skipped.end());
        }

        let rest = self.remainder();
        let length = match WORD.find(rest) {
            Some(word) => word.end(),
            // Anything else is a boundary character and a token by itself
            None => rest.chars().next()?.len_utf8(),
        };

        let start = self.pos;
        let source = self.source;
        self.advance_n(length);

        let token = MK_TOKEN!(&source[start..start + length], start, self.file);
        trace!("scanned {:?} at {}", token.value, start);
        Some(token)
    }
}

impl<'src> Iterator for Scanner<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        self.consume()
    }
}

/// Scans the whole source eagerly.
pub fn tokenize(source: &str, file: Option<String>) -> Vec<Token<'_>> {
    Scanner::new(source, file).collect()
}
