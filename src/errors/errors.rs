use std::fmt::Display;

use log::debug;
use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone)]
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

    pub fn get_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::SymbolNotFound { .. } => "SymbolNotFound",
            ErrorImpl::NotVariable { .. } => "NotVariable",
            ErrorImpl::UnexpectedType { .. } => "UnexpectedType",
            ErrorImpl::Incompatible { .. } => "Incompatible",
            ErrorImpl::BadTestExpr => "BadTestExpr",
            ErrorImpl::VariableAlreadyDeclared { .. } => "VariableAlreadyDeclared",
            ErrorImpl::FunctionAlreadyDeclared { .. } => "FunctionAlreadyDeclared",
            ErrorImpl::UnknownScope { .. } => "UnknownScope",
            ErrorImpl::UnresolvedSymbol { .. } => "UnresolvedSymbol",
            ErrorImpl::UnsupportedLvalue { .. } => "UnsupportedLvalue",
            ErrorImpl::BreakOutsideLoop => "BreakOutsideLoop",
            ErrorImpl::ContinueOutsideLoop => "ContinueOutsideLoop",
            ErrorImpl::NoOpenFunction => "NoOpenFunction",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::SymbolNotFound { symbol } => {
                ErrorTip::Suggestion(format!("`{}` is not declared in this scope", symbol))
            }
            ErrorImpl::NotVariable { symbol } => {
                ErrorTip::Suggestion(format!("`{}` is a function, not a variable", symbol))
            }
            ErrorImpl::UnexpectedType { expected, received } => ErrorTip::Suggestion(format!(
                "Expected type `{}`, received `{}`",
                expected, received
            )),
            ErrorImpl::Incompatible { expected, received } => ErrorTip::Suggestion(format!(
                "Cannot use a value of type `{}` where `{}` is expected",
                received, expected
            )),
            ErrorImpl::BadTestExpr => ErrorTip::Suggestion(String::from(
                "Test expressions must have type `int`",
            )),
            ErrorImpl::VariableAlreadyDeclared { variable } => {
                ErrorTip::Suggestion(format!("Variable `{}` already declared", variable))
            }
            ErrorImpl::FunctionAlreadyDeclared { function } => {
                ErrorTip::Suggestion(format!("Function `{}` already declared", function))
            }
            ErrorImpl::UnknownScope { .. }
            | ErrorImpl::UnresolvedSymbol { .. }
            | ErrorImpl::UnsupportedLvalue { .. }
            | ErrorImpl::NoOpenFunction => ErrorTip::None,
            ErrorImpl::BreakOutsideLoop => {
                ErrorTip::Suggestion(String::from("`break` must appear inside a loop"))
            }
            ErrorImpl::ContinueOutsideLoop => {
                ErrorTip::Suggestion(String::from("`continue` must appear inside a loop"))
            }
        }
    }

    /// Whether this error is a user-facing diagnostic rather than a broken
    /// invariant between passes.
    pub fn is_diagnostic(&self) -> bool {
        !matches!(
            self.internal_error,
            ErrorImpl::UnknownScope { .. }
                | ErrorImpl::UnresolvedSymbol { .. }
                | ErrorImpl::UnsupportedLvalue { .. }
                | ErrorImpl::BreakOutsideLoop
                | ErrorImpl::ContinueOutsideLoop
                | ErrorImpl::NoOpenFunction
        )
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}: {}",
            self.position.1, self.position.0, self.internal_error
        )
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

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("symbol {symbol:?} not found")]
    SymbolNotFound { symbol: String },
    #[error("{symbol:?} is not a variable")]
    NotVariable { symbol: String },
    #[error("unexpected type: expected {expected}, received {received}")]
    UnexpectedType { expected: String, received: String },
    #[error("incompatible types: expected {expected}, received {received}")]
    Incompatible { expected: String, received: String },
    #[error("bad test expression")]
    BadTestExpr,
    #[error("variable {variable:?} already declared")]
    VariableAlreadyDeclared { variable: String },
    #[error("function {function:?} already declared")]
    FunctionAlreadyDeclared { function: String },
    #[error("no scope was built for node {id}")]
    UnknownScope { id: i32 },
    #[error("symbol {symbol:?} reached lowering without a resolved temporary")]
    UnresolvedSymbol { symbol: String },
    #[error("unsupported lvalue {symbol:?}")]
    UnsupportedLvalue { symbol: String },
    #[error("break outside of a loop")]
    BreakOutsideLoop,
    #[error("continue outside of a loop")]
    ContinueOutsideLoop,
    #[error("instruction emitted outside of a function")]
    NoOpenFunction,
}

/// Issue sink shared by the semantic passes.
///
/// Issuing never aborts the walk; the passes keep going and the driver
/// decides what to do with the collected list.
#[derive(Debug, Default)]
pub struct Diagnostics {
    issued: Vec<Error>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Diagnostics { issued: vec![] }
    }

    pub fn issue(&mut self, position: Position, error: ErrorImpl) {
        debug!("issue at {}: {}", position.0, error);
        self.issued.push(Error::new(error, position));
    }

    pub fn push(&mut self, error: Error) {
        debug!("issue at {}: {}", error.position.0, error.internal_error);
        self.issued.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.issued.is_empty()
    }

    pub fn len(&self) -> usize {
        self.issued.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Error> {
        self.issued.iter()
    }

    pub fn extend(&mut self, other: Diagnostics) {
        self.issued.extend(other.issued);
    }

    pub fn into_vec(self) -> Vec<Error> {
        self.issued
    }
}
