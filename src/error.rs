//! Storage error types.
//!
//! Used by both repository implementations and callers of storage APIs.
//! Transport failures keep their source error so callers can tell the
//! backends apart; `NotFound` and `AlreadyExists` carry the song id.

use thiserror::Error;

/// Errors that can occur when using storage operations.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Transport or engine failure in the relational backend.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    /// Transport failure in the key-value backend.
    #[error("Key-value store error: {0}")]
    KeyValue(#[from] redis::RedisError),
    /// A stored value could not be decoded into a song.
    #[error("Malformed stored value: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Already exists: {0}")]
    AlreadyExists(String),
}
