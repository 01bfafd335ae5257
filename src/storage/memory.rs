//! In-memory bookmark store.
//!
//! Backs the console demo and most tests. Collections live in a `BTreeMap`
//! so iteration order is stable across runs.

use std::collections::BTreeMap;

use crate::types::bookmark::Bookmark;
use crate::types::errors::StoreError;

use super::{BookmarkStore, DEMO_USER_IDS};

/// Bookmark store that keeps everything in process memory.
pub struct MemoryStore {
    users: Vec<String>,
    data: BTreeMap<String, Vec<Bookmark>>,
}

impl MemoryStore {
    /// Creates an empty store listing the given users in the picker.
    pub fn new(users: &[&str]) -> Self {
        Self {
            users: users.iter().map(|u| u.to_string()).collect(),
            data: BTreeMap::new(),
        }
    }

    /// Creates a store pre-populated with the demo user ids and no bookmarks.
    pub fn with_demo_users() -> Self {
        Self::new(&DEMO_USER_IDS)
    }
}

impl BookmarkStore for MemoryStore {
    fn user_ids(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.users.clone())
    }

    fn get_data(&self, user_id: &str) -> Result<Vec<Bookmark>, StoreError> {
        Ok(self.data.get(user_id).cloned().unwrap_or_default())
    }

    fn set_data(&mut self, user_id: &str, bookmarks: &[Bookmark]) -> Result<(), StoreError> {
        self.data.insert(user_id.to_string(), bookmarks.to_vec());
        Ok(())
    }
}
