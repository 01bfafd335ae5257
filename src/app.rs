//! App Core for sharemarks.
//!
//! Central struct holding the injected bookmark store and the current user
//! selection. Everything the controller needs lives here; the WebView shell
//! and the console demo both drive the same struct.

use crate::storage::{BookmarkStore, SqliteStore};
use crate::types::errors::StoreError;

/// Central application state.
pub struct App {
    /// The injected persistence collaborator.
    pub store: Box<dyn BookmarkStore>,
    /// `None` until the user picks an identity from the selector.
    pub selected_user: Option<String>,
}

impl App {
    /// Creates an App over any store implementation.
    pub fn new(store: Box<dyn BookmarkStore>) -> Self {
        Self {
            store,
            selected_user: None,
        }
    }

    /// Opens the SQLite-backed app in the platform data directory
    /// (`SHAREMARKS_DATA_DIR` overrides when set).
    ///
    /// # Errors
    /// Returns `StoreError::Database` if the directory cannot be created or
    /// the database cannot be opened.
    pub fn open_default() -> Result<Self, StoreError> {
        let dir = crate::platform::get_data_dir();
        std::fs::create_dir_all(&dir).map_err(|e| StoreError::Database(e.to_string()))?;
        let store = SqliteStore::open(dir.join("sharemarks.db"))?;
        Ok(Self::new(Box::new(store)))
    }
}
