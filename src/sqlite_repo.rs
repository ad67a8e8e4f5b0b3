//! Relational song repository backed by SQLite.
//!
//! One parameterized statement per operation. Create and update use
//! RETURNING so the persisted row comes back in the same round trip,
//! with no second read.

use async_trait::async_trait;
use tracing::info;

use crate::error::StorageError;
use crate::models::Song;
use crate::repository::SongRepository;
use crate::sqlite_pool::SqlitePoolManager;

#[derive(Clone)]
pub struct SqliteSongRepository {
    pool_manager: SqlitePoolManager,
}

impl SqliteSongRepository {
    /// Connects to the database and ensures the `songs` table exists.
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let pool_manager = SqlitePoolManager::new(database_url).await?;
        let repo = Self { pool_manager };
        repo.init().await?;
        Ok(repo)
    }

    async fn init(&self) -> Result<(), StorageError> {
        info!("Creating songs table if not exists");

        let pool = self.pool_manager.pool();

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS songs (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                composer TEXT NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl SongRepository for SqliteSongRepository {
    async fn get_all(&self) -> Result<Vec<Song>, StorageError> {
        let pool = self.pool_manager.pool();

        let songs: Vec<Song> = sqlx::query_as("SELECT id, name, composer FROM songs")
            .fetch_all(pool)
            .await?;

        info!("Retrieved {} songs", songs.len());
        Ok(songs)
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Song>, StorageError> {
        let pool = self.pool_manager.pool();

        let song = sqlx::query_as::<_, Song>("SELECT id, name, composer FROM songs WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(song)
    }

    async fn create(&self, song: &Song) -> Result<Song, StorageError> {
        let pool = self.pool_manager.pool();

        let created = sqlx::query_as::<_, Song>(
            "INSERT INTO songs (id, name, composer) VALUES (?, ?, ?) RETURNING id, name, composer",
        )
        .bind(&song.id)
        .bind(&song.name)
        .bind(&song.composer)
        .fetch_one(pool)
        .await
        .map_err(|err| {
            if let sqlx::Error::Database(db) = &err {
                if db.is_unique_violation() {
                    return StorageError::AlreadyExists(song.id.clone());
                }
            }
            StorageError::Database(err)
        })?;

        info!("Created song: id={}", created.id);
        Ok(created)
    }

    async fn update(&self, song: &Song) -> Result<Song, StorageError> {
        let pool = self.pool_manager.pool();

        let updated = sqlx::query_as::<_, Song>(
            "UPDATE songs SET name = ?, composer = ? WHERE id = ? RETURNING id, name, composer",
        )
        .bind(&song.name)
        .bind(&song.composer)
        .bind(&song.id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| StorageError::NotFound(song.id.clone()))?;

        info!("Updated song: id={}", updated.id);
        Ok(updated)
    }

    async fn delete(&self, id: &str) -> Result<(), StorageError> {
        let pool = self.pool_manager.pool();

        let result = sqlx::query("DELETE FROM songs WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;

        info!("Deleted song: id={}, rows={}", id, result.rows_affected());
        Ok(())
    }
}
