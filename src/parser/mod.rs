//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! Expressions are parsed with a Pratt parser. Each operator token maps to
//! a parselet in a lookup table: prefix (NUD, null denotation) parselets
//! start an expression, infix (LED, left denotation) parselets extend one
//! and carry a binding power that decides how operators nest.
//!
//! - `lookups` - binding powers, parselets and the grammar tables
//! - `expr` - the precedence-climbing loop and the parselet handlers
//! - `parser` - the parser context and the top-level entry point

pub mod expr;
pub mod lookups;
pub mod parser;
