//! Lexical analysis for expressions.
//!
//! The scanner turns source text into a lazily produced stream of string
//! tokens. It makes no distinction between literals, identifiers and
//! operators: a token is either a single boundary character or a maximal
//! run of word characters (`[A-Za-z0-9_]`). Significance is decided later
//! by the parser's lookup tables.

pub mod scanner;
pub mod tokens;
