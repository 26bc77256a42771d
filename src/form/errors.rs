//! Form model error types.
//!
//! All of these are construction or mutation errors. Reading the tree,
//! including failure collection, has no error path.

use thiserror::Error;

/// Result type for form model operations
pub type FormResult<T> = Result<T, FormError>;

/// Errors raised while building or mutating a field tree
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// A group already has a child with this name
    #[error("duplicate field name '{0}' in group")]
    DuplicateField(String),

    /// Strict set referenced a child the group does not declare
    #[error("unknown field '{0}'")]
    UnknownField(String),

    /// Strict set omitted a declared child
    #[error("missing value for field '{0}'")]
    MissingField(String),

    /// A group was given a non-object value
    #[error("expected an object value for group, got {0}")]
    NotAnObject(&'static str),

    /// An array was given a non-array value
    #[error("expected an array value, got {0}")]
    NotAnArray(&'static str),

    /// Strict set gave an array the wrong number of elements
    #[error("expected {expected} array element(s), got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// A group rule names a child the group does not declare
    #[error("group rule references unknown field '{0}'")]
    UnknownRuleTarget(String),

    /// A pattern rule was built from an invalid regular expression
    #[error("invalid pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },
}
