use thiserror::Error;

use crate::Sequence;

/// Errors that can occur when writing to or reading from the journal.
#[derive(Debug, Error)]
pub enum JournalError {
    /// The appended batch does not continue the journal's sequence.
    #[error("Sequence conflict: expected next sequence {expected}, found {actual}")]
    SequenceConflict { expected: Sequence, actual: Sequence },

    /// An envelope was built without one of its required fields.
    #[error("Event envelope is missing required field '{0}'")]
    MissingField(&'static str),

    /// An append was attempted with no events.
    #[error("Cannot append an empty event batch")]
    EmptyAppend,

    /// A serialization/deserialization error occurred.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for journal operations.
pub type Result<T> = std::result::Result<T, JournalError>;
