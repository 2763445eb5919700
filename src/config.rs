//! Compiler configuration.

/// Knobs shared by the semantic and translation passes.
#[derive(Debug, Clone)]
pub struct CompilerConfig {
    /// Size in bytes of one parameter slot.
    pub pointer_size: i32,
    /// Issue `Incompatible` when the two branches of a conditional
    /// expression have incompatible types. Off by default: the expression
    /// simply takes the false branch's type.
    pub strict_conditional_types: bool,
    /// Emit `return 0` after the last statement of every function.
    pub implicit_return: bool,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            pointer_size: 4,
            strict_conditional_types: false,
            implicit_return: true,
        }
    }
}
