//! Connection configuration for the storage backends.
//!
//! Callers load `.env` with `dotenvy::dotenv().ok()` before reading;
//! this module only consults the process environment.

/// Connection strings for the two backends.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub database_url: String,
    pub redis_url: String,
}

impl StoreConfig {
    /// Reads `DATABASE_URL` and `REDIS_URL`, falling back to local
    /// defaults.
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").unwrap_or_else(|_| "songs.db".to_string()),
            redis_url: std::env::var("REDIS_URL")
                .unwrap_or_else(|_| "redis://127.0.0.1:6379".to_string()),
        }
    }
}
