//! Error types and error handling for the parser.
//!
//! Every error aborts the current parse. There is no recovery and no
//! partial tree: the caller receives the first problem encountered,
//! together with the position it was found at.

pub mod errors;

#[cfg(test)]
mod tests;
