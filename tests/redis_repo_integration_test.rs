//! Redis song repository integration tests.
//!
//! These need a live Redis and are ignored by default. Run with:
//!
//! ```text
//! REDIS_URL=redis://127.0.0.1:6379 cargo test -- --ignored
//! ```
//!
//! Ids are suffixed with a UUID per test so a shared instance stays
//! clean; every test deletes what it wrote.

use redis::AsyncCommands;
use uuid::Uuid;

use songstore::{RedisSongRepository, Song, SongRepository, StorageError, StoreConfig};

fn test_id(label: &str) -> String {
    format!("{}-{}", label, Uuid::new_v4())
}

async fn connect() -> RedisSongRepository {
    dotenvy::dotenv().ok();
    let config = StoreConfig::from_env();
    RedisSongRepository::new(&config.redis_url)
        .await
        .expect("Failed to connect to Redis")
}

async fn raw_connection() -> redis::aio::ConnectionManager {
    dotenvy::dotenv().ok();
    let config = StoreConfig::from_env();
    let client = redis::Client::open(config.redis_url.as_str()).expect("Invalid Redis URL");
    client
        .get_connection_manager()
        .await
        .expect("Failed to connect to Redis")
}

#[tokio::test]
#[ignore = "requires a running Redis instance"]
async fn test_create_then_get_by_id() {
    let repo = connect().await;
    let id = test_id("create");

    let song = Song::new(id.clone(), "Song 1", "Composer 1");
    let created = repo.create(&song).await.expect("Failed to create song");
    assert_eq!(created, song);

    let retrieved = repo
        .get_by_id(&id)
        .await
        .expect("Failed to get song")
        .expect("Song should exist");
    assert_eq!(retrieved.name, "Song 1");
    assert_eq!(retrieved.composer, "Composer 1");

    repo.delete(&id).await.expect("Failed to clean up");
}

#[tokio::test]
#[ignore = "requires a running Redis instance"]
async fn test_get_by_id_missing_is_none() {
    let repo = connect().await;

    let missing = repo
        .get_by_id(&test_id("missing"))
        .await
        .expect("Failed to query");
    assert!(missing.is_none());
}

#[tokio::test]
#[ignore = "requires a running Redis instance"]
async fn test_update_missing_id_upserts() {
    let repo = connect().await;
    let id = test_id("upsert");

    // No existence check: update of an absent id materializes it.
    let updated = repo
        .update(&Song::new(id.clone(), "Song 1", "Composer 1"))
        .await
        .expect("Upsert update should succeed");
    assert_eq!(updated.id, id);

    let stored = repo
        .get_by_id(&id)
        .await
        .expect("Failed to get song")
        .expect("Song should exist after upsert");
    assert_eq!(stored.name, "Song 1");

    repo.delete(&id).await.expect("Failed to clean up");
}

#[tokio::test]
#[ignore = "requires a running Redis instance"]
async fn test_create_same_id_overwrites() {
    let repo = connect().await;
    let id = test_id("overwrite");

    repo.create(&Song::new(id.clone(), "First", "Composer 1"))
        .await
        .expect("Failed to create song");
    repo.create(&Song::new(id.clone(), "Second", "Composer 2"))
        .await
        .expect("Second create should overwrite");

    let stored = repo
        .get_by_id(&id)
        .await
        .expect("Failed to get song")
        .expect("Song should exist");
    assert_eq!(stored.name, "Second");

    repo.delete(&id).await.expect("Failed to clean up");
}

#[tokio::test]
#[ignore = "requires a running Redis instance"]
async fn test_delete_is_idempotent() {
    let repo = connect().await;
    let id = test_id("delete");

    repo.create(&Song::new(id.clone(), "Song 1", "Composer 1"))
        .await
        .expect("Failed to create song");

    repo.delete(&id).await.expect("Failed to delete song");
    let deleted = repo.get_by_id(&id).await.expect("Failed to query");
    assert!(deleted.is_none());

    // Second delete of the same id is a no-op.
    repo.delete(&id).await.expect("Repeated delete should succeed");
}

#[tokio::test]
#[ignore = "requires a running Redis instance"]
async fn test_get_all_sees_only_song_keys() {
    let repo = connect().await;
    let mut conn = raw_connection().await;
    let id = test_id("scan");
    let foreign_key = format!("other:{}", Uuid::new_v4());

    repo.create(&Song::new(id.clone(), "Song 1", "Composer 1"))
        .await
        .expect("Failed to create song");
    // A non-song key in the same database must not break get_all.
    let _: () = conn
        .set(&foreign_key, "not a song")
        .await
        .expect("Failed to write foreign key");

    let songs = repo.get_all().await.expect("Failed to get songs");
    assert!(songs.iter().any(|s| s.id == id));
    assert!(songs.iter().all(|s| !s.id.starts_with("other:")));

    let _: () = conn
        .del(&foreign_key)
        .await
        .expect("Failed to clean up foreign key");
    repo.delete(&id).await.expect("Failed to clean up");
}

#[tokio::test]
#[ignore = "requires a running Redis instance"]
async fn test_malformed_value_is_decode_error() {
    let repo = connect().await;
    let mut conn = raw_connection().await;
    let id = test_id("malformed");
    let key = format!("song:{}", id);

    let _: () = conn
        .set(&key, "{not json")
        .await
        .expect("Failed to write malformed value");

    let err = repo
        .get_by_id(&id)
        .await
        .expect_err("Malformed value should fail to decode");
    assert!(matches!(err, StorageError::Decode(_)));

    let _: () = conn.del(&key).await.expect("Failed to clean up");
}
