use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedEndOfInput => "UnexpectedEndOfInput",
            ErrorImpl::UnrecognizedInfixToken { .. } => "UnrecognizedInfixToken",
            ErrorImpl::MismatchedDelimiter { .. } => "MismatchedDelimiter",
            ErrorImpl::TrailingInput { .. } => "TrailingInput",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedEndOfInput => ErrorTip::Suggestion(String::from(
                "The expression ended early, is an operand missing?",
            )),
            ErrorImpl::UnrecognizedInfixToken { token } => ErrorTip::Suggestion(format!(
                "`{}` cannot continue an expression, is an operator missing?",
                token
            )),
            ErrorImpl::MismatchedDelimiter { expected, found } => match found {
                Some(found) => ErrorTip::Suggestion(format!(
                    "Expected `{}` here, found `{}`",
                    expected, found
                )),
                None => ErrorTip::Suggestion(format!(
                    "Expected `{}` before the end of input",
                    expected
                )),
            },
            ErrorImpl::TrailingInput { .. } => ErrorTip::None,
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("expect token but found none")]
    UnexpectedEndOfInput,
    #[error("unexpected token {token}")]
    UnrecognizedInfixToken { token: String },
    #[error("expect token {expected} but got {}", .found.as_deref().unwrap_or("null"))]
    MismatchedDelimiter {
        expected: String,
        found: Option<String>,
    },
    #[error("unexpected trailing input starting at {token}")]
    TrailingInput { token: String },
}
