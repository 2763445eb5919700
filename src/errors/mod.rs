//! Error types and error handling for the compiler.
//!
//! This module defines the error types used by the semantic and
//! translation passes. It includes:
//!
//! - Error structures with source position information
//! - Diagnostic variants issued by symbol building and type checking
//! - Internal variants for broken invariants between passes
//! - The `Diagnostics` issue sink

pub mod errors;

#[cfg(test)]
mod tests;
