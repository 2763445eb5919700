//! Semantic analysis.
//!
//! Two passes run over the untyped tree:
//!
//! - `symbol_builder` creates a scope for every scope-owning node and
//!   declares functions, parameters and locals in it
//! - `type_checker` resolves every reference against those scopes and
//!   produces the typed tree in `typed_ast`
//!
//! Semantic problems never stop either pass. They are collected as
//! diagnostics and the offending expression is typed `Error`, which
//! keeps a single mistake from being reported more than once.

pub mod symbol_builder;
pub mod type_checker;
pub mod typed_ast;
