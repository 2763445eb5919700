//! Utility macros for the compiler.
//!
//! This module defines helper macros used by the translation helper:
//!
//! - `MK_BINARY_GEN!` - Creates a `gen_<op>` method for a binary TAC operator
//! - `MK_UNARY_GEN!` - Creates a `gen_<op>` method for a unary TAC operator
//!
//! These macros reduce boilerplate in `TransHelper`, which exposes one
//! emitting method per IR operator.

/// Creates a method emitting a binary instruction into a fresh temporary.
///
/// Must be invoked inside an `impl` block of a type providing
/// `gen_binary(&mut self, TacBinary, Temp, Temp) -> Result<Temp, Error>`.
///
/// # Arguments
///
/// * `$name` - The generated method name
/// * `$op` - The TacBinary operator it emits
///
/// # Example
///
/// ```ignore
/// MK_BINARY_GEN!(gen_add, TacBinary::Add);
/// ```
#[macro_export]
macro_rules! MK_BINARY_GEN {
    ($name:ident, $op:expr) => {
        pub fn $name(&mut self, left: Temp, right: Temp) -> Result<Temp, Error> {
            self.gen_binary($op, left, right)
        }
    };
}

/// Creates a method emitting a unary instruction into a fresh temporary.
///
/// # Arguments
///
/// * `$name` - The generated method name
/// * `$op` - The TacUnary operator it emits
///
/// # Example
///
/// ```ignore
/// MK_UNARY_GEN!(gen_neg, TacUnary::Neg);
/// ```
#[macro_export]
macro_rules! MK_UNARY_GEN {
    ($name:ident, $op:expr) => {
        pub fn $name(&mut self, src: Temp) -> Result<Temp, Error> {
            self.gen_unary($op, src)
        }
    };
}
