//! Song model for persistence.
//!
//! Maps to the `songs` table in the relational backend and to the JSON
//! value stored under `song:<id>` in the key-value backend.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Song {
    pub id: String,
    pub name: String,
    pub composer: String,
}

impl Song {
    /// Creates a song with an externally assigned id.
    ///
    /// The id is the sole lookup key in both backends and is immutable
    /// once the record exists.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        composer: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            composer: composer.into(),
        }
    }
}
