//! Unit tests for error handling.
//!
//! This module contains tests for error types and diagnostic rendering.

use pretty_assertions::assert_eq;

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::lexer::lexer::tokenize;
use crate::Position;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnhandledCharacter { character: '@' },
        Position::new(3, 10),
        "test.ib",
        String::from("let x = @"),
    );

    assert_eq!(error.get_error_name(), "UnhandledCharacter");
    assert_eq!(error.get_position(), Position::new(3, 10));
    assert_eq!(error.get_file(), "test.ib");
    assert_eq!(error.get_line_text(), "let x = @");
}

#[test]
fn test_error_names() {
    let at = |kind| Error::new(kind, Position::start(), "test.ib", String::new());

    assert_eq!(at(ErrorImpl::MalformedComment).get_error_name(), "MalformedComment");
    assert_eq!(
        at(ErrorImpl::UnterminatedLiteral { delimiter: '"' }).get_error_name(),
        "UnterminatedLiteral"
    );
}

#[test]
fn test_error_messages() {
    assert_eq!(ErrorImpl::MalformedComment.to_string(), "Malformed comment");
    assert_eq!(
        ErrorImpl::UnterminatedLiteral { delimiter: '\'' }.to_string(),
        "Unterminated literal, missing closing '"
    );
    assert_eq!(
        ErrorImpl::UnhandledCharacter { character: '$' }.to_string(),
        "Unhandled rune! "
    );
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnhandledCharacter { character: '@' },
        Position::start(),
        "test.ib",
        String::from("@"),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::UnterminatedLiteral { delimiter: '"' },
        Position::start(),
        "test.ib",
        String::from("\"abc"),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "Add a closing `\"` before the end of the line"),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_diagnostic_caret_under_column() {
    let error = tokenize("a / b", Some("test.ib")).unwrap_err();

    assert_eq!(
        error.to_string(),
        format!("./test.ib:1:4 a / \n{}^ Malformed comment", " ".repeat(17))
    );
}

#[test]
fn test_diagnostic_keeps_tabs_in_indicator() {
    let error = tokenize("\tx = #", Some("test.ib")).unwrap_err();

    assert_eq!(
        error.to_string(),
        format!("./test.ib:1:6 \tx = #\n{}\t    ^ Unhandled rune! ", " ".repeat(14))
    );
}

#[test]
fn test_diagnostic_on_later_line() {
    let error = tokenize("x\n  y = \"oops\n", Some("main.ib")).unwrap_err();

    let rendered = error.to_string();
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines[0], "./main.ib:2:7   y = \"oops");
    assert_eq!(lines[1].find('^'), Some("./main.ib:2:7 ".len() + 6));
}

#[test]
fn test_unhandled_character_diagnostic_text() {
    let error = tokenize("x = #", Some("golden.ib")).unwrap_err();

    assert_eq!(
        error.to_string(),
        format!("./golden.ib:1:5 x = #\n{}^ Unhandled rune! ", " ".repeat(20))
    );
}
