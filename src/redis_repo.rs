//! Key-value song repository backed by Redis.
//!
//! Songs are stored as JSON strings under `song:<id>` keys with no
//! expiry. There is no duplicate protection: a second create with the
//! same id overwrites, and update shares create's write path (upsert).

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use tracing::info;

use crate::error::StorageError;
use crate::models::Song;
use crate::repository::SongRepository;

/// Key prefix separating songs from other entities sharing the store.
const KEY_PREFIX: &str = "song:";

fn song_key(id: &str) -> String {
    format!("{}{}", KEY_PREFIX, id)
}

#[derive(Clone)]
pub struct RedisSongRepository {
    conn: ConnectionManager,
}

impl RedisSongRepository {
    /// Connects to the given Redis URL and opens a multiplexed
    /// connection handle shared by all clones.
    pub async fn new(redis_url: &str) -> Result<Self, StorageError> {
        info!("Connecting to Redis: {}", redis_url);

        let client = redis::Client::open(redis_url)?;
        let conn = client.get_connection_manager().await?;

        Ok(Self { conn })
    }
}

#[async_trait]
impl SongRepository for RedisSongRepository {
    async fn get_all(&self) -> Result<Vec<Song>, StorageError> {
        let mut conn = self.conn.clone();

        let keys: Vec<String> = conn.keys(format!("{}*", KEY_PREFIX)).await?;

        let mut songs = Vec::with_capacity(keys.len());
        for key in keys {
            // A key deleted between the listing and the fetch is skipped.
            let val: Option<String> = conn.get(&key).await?;
            if let Some(val) = val {
                songs.push(serde_json::from_str(&val)?);
            }
        }

        info!("Retrieved {} songs", songs.len());
        Ok(songs)
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Song>, StorageError> {
        let mut conn = self.conn.clone();

        let val: Option<String> = conn.get(song_key(id)).await?;
        match val {
            Some(val) => Ok(Some(serde_json::from_str(&val)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, song: &Song) -> Result<Song, StorageError> {
        let mut conn = self.conn.clone();

        let encoded = serde_json::to_string(song)?;
        let _: () = conn.set(song_key(&song.id), encoded).await?;

        info!("Stored song: id={}", song.id);
        Ok(song.clone())
    }

    async fn update(&self, song: &Song) -> Result<Song, StorageError> {
        // Same write path as create: no existence check, last write wins.
        self.create(song).await
    }

    async fn delete(&self, id: &str) -> Result<(), StorageError> {
        let mut conn = self.conn.clone();

        let _: () = conn.del(song_key(id)).await?;

        info!("Deleted song: id={}", id);
        Ok(())
    }
}
