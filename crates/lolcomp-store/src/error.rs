//! Storage and persistence error types.

use thiserror::Error;

/// Failure in the key-value layer.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Read failed for a key.
    #[error("storage read failed for {key}: {source}")]
    Read {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// Write failed for a key (quota, permissions, disk).
    #[error("storage write failed for {key}: {source}")]
    Write {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// Remove failed for a key.
    #[error("storage remove failed for {key}: {source}")]
    Remove {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// Backend-level failure not tied to one operation.
    #[error("storage backend unavailable: {0}")]
    Backend(String),
}

/// Failure in the composition persistence manager.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The underlying port rejected the operation; in-memory state is left
    /// untouched when this surfaces from a mutation.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The collection could not be serialized for persistence.
    #[error("failed to encode composition collection: {0}")]
    Encode(#[from] serde_json::Error),
}
