//! Songstore crate: song persistence over interchangeable backends.
//!
//! ## Modules
//!
//! - [`error`] – Storage error types
//! - [`models`] – Song
//! - [`repository`] – SongRepository trait
//! - [`sqlite_repo`] – SqliteSongRepository (SQLite)
//! - [`redis_repo`] – RedisSongRepository (Redis)
//! - [`sqlite_pool`] – SqlitePoolManager
//! - [`config`] – StoreConfig

mod config;
mod error;
mod models;
mod redis_repo;
mod repository;
mod sqlite_pool;
mod sqlite_repo;


pub use config::StoreConfig;
pub use error::StorageError;
pub use models::Song;
pub use redis_repo::RedisSongRepository;
pub use repository::SongRepository;
pub use sqlite_pool::SqlitePoolManager;
pub use sqlite_repo::SqliteSongRepository;
