//! Unit tests for error handling.
//!
//! This module contains tests for error types and the issue sink.

use crate::errors::errors::{Diagnostics, Error, ErrorImpl, ErrorTip};
use crate::Position;
use std::rc::Rc;

fn position(offset: u32) -> Position {
    Position(offset, Rc::new("test.mind".to_string()))
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::SymbolNotFound {
            symbol: "x".to_string(),
        },
        position(10),
    );

    assert_eq!(error.get_error_name(), "SymbolNotFound");
    assert!(error.is_diagnostic());
}

#[test]
fn test_error_position() {
    let error = Error::new(ErrorImpl::BadTestExpr, position(42));

    assert_eq!(error.get_position().0, 42);
}

#[test]
fn test_incompatible_error() {
    let error = Error::new(
        ErrorImpl::Incompatible {
            expected: "int".to_string(),
            received: "void".to_string(),
        },
        position(0),
    );

    assert_eq!(error.get_error_name(), "Incompatible");
    assert_eq!(
        error.get_tip().to_string(),
        "Cannot use a value of type `void` where `int` is expected"
    );
}

#[test]
fn test_unexpected_type_error() {
    let error = Error::new(
        ErrorImpl::UnexpectedType {
            expected: "int".to_string(),
            received: "void".to_string(),
        },
        position(0),
    );

    assert_eq!(error.get_error_name(), "UnexpectedType");
}

#[test]
fn test_not_variable_error() {
    let error = Error::new(
        ErrorImpl::NotVariable {
            symbol: "main".to_string(),
        },
        position(0),
    );

    assert_eq!(error.get_error_name(), "NotVariable");
}

#[test]
fn test_internal_errors_are_not_diagnostics() {
    let error = Error::new(ErrorImpl::BreakOutsideLoop, position(3));
    assert!(!error.is_diagnostic());

    let error = Error::new(ErrorImpl::UnknownScope { id: 7 }, position(3));
    assert!(!error.is_diagnostic());
    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_display() {
    let error = Error::new(ErrorImpl::BadTestExpr, position(5));

    assert_eq!(error.to_string(), "test.mind:5: bad test expression");
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_diagnostics_keep_issue_order() {
    let mut diagnostics = Diagnostics::new();
    assert!(diagnostics.is_empty());

    diagnostics.issue(position(1), ErrorImpl::BadTestExpr);
    diagnostics.issue(
        position(2),
        ErrorImpl::SymbolNotFound {
            symbol: "y".to_string(),
        },
    );

    let names: Vec<&str> = diagnostics.iter().map(|e| e.get_error_name()).collect();
    assert_eq!(names, vec!["BadTestExpr", "SymbolNotFound"]);
    assert_eq!(diagnostics.len(), 2);
}

#[test]
fn test_diagnostics_extend() {
    let mut first = Diagnostics::new();
    first.issue(position(1), ErrorImpl::BadTestExpr);

    let mut second = Diagnostics::new();
    second.issue(
        position(9),
        ErrorImpl::VariableAlreadyDeclared {
            variable: "i".to_string(),
        },
    );

    first.extend(second);
    let issued = first.into_vec();
    assert_eq!(issued.len(), 2);
    assert_eq!(issued[1].get_position().0, 9);
}
