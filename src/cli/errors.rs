//! CLI-specific error types

use thiserror::Error;

use crate::form::FormError;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors; each maps to a non-zero exit
#[derive(Debug, Error)]
pub enum CliError {
    /// Input file could not be read
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// Input file is not valid JSON
    #[error("input is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Form construction or update failed
    #[error("form error: {0}")]
    Form(#[from] FormError),

    /// The document was applied but left the form invalid
    #[error("document failed validation with {0} failure(s)")]
    Invalid(usize),
}
