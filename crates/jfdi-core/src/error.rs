//! Error types for generator construction and expansion.

/// Error type for generator operations.
///
/// Construction functions return `InvalidArgument` immediately for statically
/// invalid parameters. Expansion returns either variant while a generator
/// runs; neither is recovered from inside the tree, so a single failure
/// aborts the whole invocation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeneratorError {
    /// A resolved value did not have the kind a combinator requires
    #[error("{context}: expected {expected}, found {found}")]
    TypeMismatch {
        /// What the combinator was resolving when it failed
        context: String,
        /// Kind the combinator required
        expected: &'static str,
        /// Kind that was actually produced
        found: &'static str,
    },

    /// A parameter was out of its valid domain
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl GeneratorError {
    /// Create a type mismatch error.
    pub fn type_mismatch(
        context: impl Into<String>,
        expected: &'static str,
        found: &'static str,
    ) -> Self {
        Self::TypeMismatch {
            context: context.into(),
            expected,
            found,
        }
    }

    /// Create an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Replace the context of a type mismatch, leaving other errors untouched.
    ///
    /// Combinators use this to report which of their arguments failed to
    /// resolve instead of the generic coercion message.
    pub fn within(self, context: impl Into<String>) -> Self {
        match self {
            Self::TypeMismatch {
                expected, found, ..
            } => Self::TypeMismatch {
                context: context.into(),
                expected,
                found,
            },
            other => other,
        }
    }
}
