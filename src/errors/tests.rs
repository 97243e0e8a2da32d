//! Unit tests for error handling.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;
use std::rc::Rc;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnexpectedEndOfInput,
        Position(10, Rc::new("test.expr".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnexpectedEndOfInput");
    assert_eq!(error.get_kind(), &ErrorImpl::UnexpectedEndOfInput);
}

#[test]
fn test_error_position() {
    let pos = Position(42, Rc::new("test.expr".to_string()));
    let error = Error::new(
        ErrorImpl::UnrecognizedInfixToken {
            token: "2".to_string(),
        },
        pos.clone(),
    );

    assert_eq!(error.get_position().0, 42);
    assert_eq!(*error.get_position().1, "test.expr");
}

#[test]
fn test_error_messages() {
    let pos = Position(0, Rc::new("test.expr".to_string()));

    let error = Error::new(ErrorImpl::UnexpectedEndOfInput, pos.clone());
    assert_eq!(error.to_string(), "expect token but found none");

    let error = Error::new(
        ErrorImpl::MismatchedDelimiter {
            expected: ")".to_string(),
            found: Some("1".to_string()),
        },
        pos.clone(),
    );
    assert_eq!(error.to_string(), "expect token ) but got 1");

    let error = Error::new(
        ErrorImpl::MismatchedDelimiter {
            expected: ")".to_string(),
            found: None,
        },
        pos.clone(),
    );
    assert_eq!(error.to_string(), "expect token ) but got null");

    let error = Error::new(
        ErrorImpl::UnrecognizedInfixToken {
            token: "2".to_string(),
        },
        pos.clone(),
    );
    assert_eq!(error.to_string(), "unexpected token 2");

    let error = Error::new(
        ErrorImpl::TrailingInput {
            token: ")".to_string(),
        },
        pos,
    );
    assert_eq!(error.to_string(), "unexpected trailing input starting at )");
}

#[test]
fn test_error_names() {
    let pos = Position::null();

    let cases = [
        (ErrorImpl::UnexpectedEndOfInput, "UnexpectedEndOfInput"),
        (
            ErrorImpl::UnrecognizedInfixToken {
                token: "x".to_string(),
            },
            "UnrecognizedInfixToken",
        ),
        (
            ErrorImpl::MismatchedDelimiter {
                expected: ":".to_string(),
                found: Some(";".to_string()),
            },
            "MismatchedDelimiter",
        ),
        (
            ErrorImpl::TrailingInput {
                token: ",".to_string(),
            },
            "TrailingInput",
        ),
    ];

    for (kind, name) in cases {
        assert_eq!(Error::new(kind, pos.clone()).get_error_name(), name);
    }
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::MismatchedDelimiter {
            expected: ":".to_string(),
            found: Some(";".to_string()),
        },
        Position::null(),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "Expected `:` here, found `;`"),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_trailing_input_has_no_tip() {
    let error = Error::new(
        ErrorImpl::TrailingInput {
            token: ")".to_string(),
        },
        Position::null(),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_error_is_std_error() {
    fn takes_error(_: &dyn std::error::Error) {}

    takes_error(&Error::new(ErrorImpl::UnexpectedEndOfInput, Position::null()));
}
