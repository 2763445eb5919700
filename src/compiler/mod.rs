//! Translation into three-address code.
//!
//! This module lowers the typed tree into a linear IR of temporaries,
//! labels and jumps. It handles:
//!
//! - The IR itself and its textual listing (`tac`)
//! - Temporary, label and function bookkeeping (`trans_helper`)
//! - Lowering of functions, statements and expressions
//!
//! Structured control flow is flattened into labelled jumps. The jump
//! targets of the innermost loop are threaded through statement lowering
//! as `LoopTargets`.

pub mod compiler;
pub mod expr;
pub mod stmt;
pub mod tac;
pub mod trans_helper;

#[cfg(test)]
mod tests;
