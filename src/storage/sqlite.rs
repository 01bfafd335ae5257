//! SQLite-backed bookmark store.
//!
//! Each user's collection is stored as a single JSON document in the
//! `user_bookmarks` table, written wholesale on every `set_data`. The picker
//! list comes from the `users` table, which migrations seed with the demo
//! accounts on first open.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use rusqlite::params;

use crate::database::Database;
use crate::types::bookmark::Bookmark;
use crate::types::errors::StoreError;

use super::BookmarkStore;

/// Bookmark store persisted in a SQLite database.
pub struct SqliteStore {
    db: Database,
}

impl SqliteStore {
    /// Opens (or creates) the store at the given file path.
    ///
    /// # Errors
    /// Returns `StoreError::Database` if the database cannot be opened or migrated.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let db = Database::open(path).map_err(|e| StoreError::Database(e.to_string()))?;
        Ok(Self { db })
    }

    /// Opens an in-memory store. Used by tests.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let db = Database::open_in_memory().map_err(|e| StoreError::Database(e.to_string()))?;
        Ok(Self { db })
    }

    /// Returns the current UNIX timestamp in milliseconds.
    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as i64
    }
}

impl BookmarkStore for SqliteStore {
    fn user_ids(&self) -> Result<Vec<String>, StoreError> {
        let mut stmt = self
            .db
            .connection()
            .prepare("SELECT id FROM users ORDER BY position, id")
            .map_err(|e| StoreError::Database(e.to_string()))?;

        let rows = stmt
            .query_map([], |row| row.get::<_, String>(0))
            .map_err(|e| StoreError::Database(e.to_string()))?;

        let mut ids = Vec::new();
        for row in rows {
            ids.push(row.map_err(|e| StoreError::Database(e.to_string()))?);
        }
        Ok(ids)
    }

    fn get_data(&self, user_id: &str) -> Result<Vec<Bookmark>, StoreError> {
        let json: String = match self.db.connection().query_row(
            "SELECT bookmarks FROM user_bookmarks WHERE user_id = ?1",
            params![user_id],
            |row| row.get(0),
        ) {
            Ok(json) => json,
            Err(rusqlite::Error::QueryReturnedNoRows) => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::Database(e.to_string())),
        };

        serde_json::from_str(&json).map_err(|e| StoreError::Serialization(e.to_string()))
    }

    fn set_data(&mut self, user_id: &str, bookmarks: &[Bookmark]) -> Result<(), StoreError> {
        let json =
            serde_json::to_string(bookmarks).map_err(|e| StoreError::Serialization(e.to_string()))?;

        self.db
            .connection()
            .execute(
                "INSERT OR REPLACE INTO user_bookmarks (user_id, bookmarks, updated_at) VALUES (?1, ?2, ?3)",
                params![user_id, json, Self::now()],
            )
            .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(())
    }
}
