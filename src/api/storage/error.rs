//! Storage error types for the API storage backends.

use super::Collection;
use thiserror::Error;

/// Storage operation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// A uniqueness constraint rejected the write
    #[error("Conflict in {collection}: {message}")]
    Conflict {
        collection: Collection,
        message: String,
    },
    /// The store could not be reached
    #[error("Connection error: {0}")]
    Connection(String),
    /// A query failed after a connection was obtained
    #[error("Query failed: {0}")]
    Query(String),
    /// Schema migrations could not be applied
    #[error("Migration failed: {0}")]
    Migration(String),
}
