//! Repository contract shared by the song storage backends.
//!
//! Callers pick a backend at construction time and depend only on this
//! trait; it is object-safe, so `Arc<dyn SongRepository>` is the usual
//! injection seam.

use async_trait::async_trait;

use crate::error::StorageError;
use crate::models::Song;

/// Uniform CRUD contract over the song storage backends.
///
/// Every operation is one round trip to the backing store with no
/// cross-call state. Dropping the returned future aborts the in-flight
/// request; nothing is retried. A missing id is reported as `Ok(None)`
/// by `get_by_id` in both backends, never as an error.
#[async_trait]
pub trait SongRepository: Send + Sync {
    /// Returns every stored song; order is backend-dependent.
    async fn get_all(&self) -> Result<Vec<Song>, StorageError>;

    /// Returns the song with the given id, or `None` if absent.
    async fn get_by_id(&self, id: &str) -> Result<Option<Song>, StorageError>;

    /// Writes a new song and returns the persisted form.
    ///
    /// The relational backend rejects a duplicate id with
    /// [`StorageError::AlreadyExists`]; the key-value backend silently
    /// overwrites.
    async fn create(&self, song: &Song) -> Result<Song, StorageError>;

    /// Updates name and composer of the song matching `song.id`.
    ///
    /// The relational backend reports a missing id with
    /// [`StorageError::NotFound`]; the key-value backend upserts.
    async fn update(&self, song: &Song) -> Result<Song, StorageError>;

    /// Removes the song with the given id; an absent id is a no-op.
    async fn delete(&self, id: &str) -> Result<(), StorageError>;
}
