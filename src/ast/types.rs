use std::fmt::Display;

/// Type values understood by the semantic passes.
///
/// The language has a single primitive integer type. `Void` only appears
/// as a declared type and `Error` is the sentinel substituted for any
/// expression whose checking failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Type {
    Int,
    Void,
    Error,
}

impl Type {
    pub fn equal(&self, other: &Type) -> bool {
        self == other
    }

    /// Checks if a value of this type may be assigned or returned where
    /// `other` is expected.
    ///
    /// `Error` is compatible with everything so that a failed
    /// subexpression never produces a second diagnostic.
    pub fn is_compatible_with(&self, other: &Type) -> bool {
        self.is_error() || other.is_error() || self.equal(other)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Type::Error)
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Type::Int => write!(f, "int"),
            Type::Void => write!(f, "void"),
            Type::Error => write!(f, "error"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Type;

    #[test]
    fn test_equal_is_strict() {
        assert!(Type::Int.equal(&Type::Int));
        assert!(!Type::Int.equal(&Type::Error));
        assert!(!Type::Int.equal(&Type::Void));
    }

    #[test]
    fn test_error_is_compatible_with_everything() {
        assert!(Type::Error.is_compatible_with(&Type::Int));
        assert!(Type::Void.is_compatible_with(&Type::Error));
        assert!(Type::Int.is_compatible_with(&Type::Int));
        assert!(!Type::Void.is_compatible_with(&Type::Int));
    }
}
