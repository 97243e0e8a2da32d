use std::fmt::Display;

use crate::Span;

/// A slice of the source text plus where it came from.
///
/// Tokens never contain whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'src> {
    pub value: &'src str,
    pub span: Span,
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl Token<'_> {
    pub fn is(&self, value: &str) -> bool {
        self.value == value
    }
}
