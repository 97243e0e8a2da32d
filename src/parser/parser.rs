//! Parser context and top-level entry point.
//!
//! The `Parser` pairs a scanner with a parselet table. Handlers receive it
//! explicitly and use it to read tokens and to parse their operands.

use log::debug;

use crate::{
    ast::ast::Node,
    errors::errors::{Error, ErrorImpl},
    scanner::{scanner::Scanner, tokens::Token},
    Position,
};

use super::{
    expr::parse_expr,
    lookups::{default_lookups, BindingPower, Parselets},
};

pub struct Parser<'src, 'g> {
    /// Source of tokens, scanned on demand
    scanner: Scanner<'src>,
    /// Prefix, infix and terminator tables of the grammar
    lookups: &'g Parselets,
}

impl<'src, 'g> Parser<'src, 'g> {
    pub fn new(scanner: Scanner<'src>, lookups: &'g Parselets) -> Self {
        Parser { scanner, lookups }
    }

    pub fn get_lookups(&self) -> &'g Parselets {
        self.lookups
    }

    /// Returns the token `offset` places ahead without consuming it.
    pub fn peek(&mut self, offset: usize) -> Option<&Token<'src>> {
        self.scanner.peek(offset)
    }

    /// Text of the next token, if any.
    pub fn current_value(&mut self) -> Option<&'src str> {
        self.scanner.peek(0).map(|token| token.value)
    }

    /// Consumes and returns the next token.
    pub fn advance(&mut self) -> Option<Token<'src>> {
        self.scanner.consume()
    }

    /// Consumes the next token, which must be `expected`.
    pub fn expect(&mut self, expected: &str) -> Result<Token<'src>, Error> {
        let position = self.get_position();
        match self.scanner.consume() {
            Some(token) if token.is(expected) => Ok(token),
            found => Err(Error::new(
                ErrorImpl::MismatchedDelimiter {
                    expected: expected.to_string(),
                    found: found.map(|token| token.value.to_string()),
                },
                position,
            )),
        }
    }

    /// Position of the next token, or of the end of input.
    pub fn get_position(&self) -> Position {
        self.scanner.position()
    }

    /// Parses one complete expression.
    ///
    /// All input has to be used up; a token left after the expression is
    /// an error.
    pub fn parse(mut self) -> Result<Node, Error> {
        let node = parse_expr(&mut self, BindingPower::DEFAULT)?;

        let position = self.get_position();
        if let Some(token) = self.advance() {
            let token = token.value.to_string();
            let error = if self.lookups.is_terminator(&token) {
                ErrorImpl::TrailingInput { token }
            } else {
                ErrorImpl::UnrecognizedInfixToken { token }
            };
            return Err(Error::new(error, position));
        }

        debug!("parsed expression of depth {}", node.depth());
        Ok(node)
    }
}

impl<'src> Parser<'src, 'static> {
    /// A parser for the arithmetic grammar.
    pub fn with_default_lookups(scanner: Scanner<'src>) -> Self {
        Parser::new(scanner, default_lookups())
    }
}

/// Parses `source` as a single expression with the arithmetic grammar.
///
/// # Arguments
///
/// * `source` - The expression text
/// * `file` - Name used in error positions, `shell` when `None`
pub fn parse(source: &str, file: Option<String>) -> Result<Node, Error> {
    Parser::with_default_lookups(Scanner::new(source, file)).parse()
}
