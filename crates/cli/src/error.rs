//! CLI error types.

use domain::DomainError;
use thiserror::Error;

/// Errors that end an interactive session.
///
/// Domain errors are normally reported to the operator and the session goes
/// on; only terminal I/O failures are fatal.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Result type for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
