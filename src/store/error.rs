//! StoreError type.

use crate::domain::ParseNoteError;
use crate::infra::KvError;
use thiserror::Error;

/// Errors that can occur during note store operations.
///
/// Every variant leaves the stored collection exactly as it was before
/// the failed operation.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The note would be empty, or otherwise fails validation.
    #[error("{0}")]
    Validation(#[from] ParseNoteError),

    /// No note has the requested id.
    #[error("note not found: {id}")]
    NotFound { id: String },

    /// An import payload is not a JSON array of note records.
    #[error("invalid notes file: {reason}")]
    Format { reason: String },

    /// The persisted collection could not be read back.
    #[error("stored notes are corrupt: {source}")]
    Corrupt {
        #[source]
        source: serde_json::Error,
    },

    /// The collection could not be encoded for storage.
    #[error("failed to encode notes: {source}")]
    Encode {
        #[source]
        source: serde_json::Error,
    },

    /// The key-value backend failed.
    #[error("persistence failed: {0}")]
    Persistence(#[from] KvError),
}

/// Result type for note store operations.
pub type StoreResult<T> = Result<T, StoreError>;
