//! Bookmark Manager for sharemarks.
//!
//! Implements `BookmarkManagerTrait` — listing, creation, and like counting
//! over one user's collection, backed by any `BookmarkStore`.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::storage::BookmarkStore;
use crate::types::bookmark::Bookmark;
use crate::types::errors::BookmarkError;

/// Trait defining bookmark domain operations.
pub trait BookmarkManagerTrait {
    fn list_bookmarks(&self, user_id: &str) -> Result<Vec<Bookmark>, BookmarkError>;
    fn add_bookmark(
        &mut self,
        user_id: &str,
        url: &str,
        title: &str,
        description: &str,
    ) -> Result<Bookmark, BookmarkError>;
    /// Increments a bookmark's like count. Returns the new count.
    fn like_bookmark(&mut self, user_id: &str, bookmark_id: i64) -> Result<u32, BookmarkError>;
}

/// Bookmark manager over a borrowed store.
pub struct BookmarkManager<'a> {
    store: &'a mut dyn BookmarkStore,
}

impl<'a> BookmarkManager<'a> {
    /// Creates a new `BookmarkManager` using the provided store.
    pub fn new(store: &'a mut dyn BookmarkStore) -> Self {
        Self { store }
    }

    /// Returns the current UNIX timestamp in milliseconds.
    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as i64
    }

    /// Picks the id for a new bookmark: the clock reading, bumped past the
    /// highest existing id so two adds in the same millisecond stay unique.
    /// The bump saturates at `i64::MAX`; stores accept arbitrary ids.
    fn next_id(existing: &[Bookmark], now: i64) -> i64 {
        let max_existing = existing.iter().map(|b| b.id).max().unwrap_or(0);
        now.max(max_existing.saturating_add(1))
    }
}

impl<'a> BookmarkManagerTrait for BookmarkManager<'a> {
    /// Returns the user's collection as stored. Ordering is a view concern.
    fn list_bookmarks(&self, user_id: &str) -> Result<Vec<Bookmark>, BookmarkError> {
        self.store
            .get_data(user_id)
            .map_err(|e| BookmarkError::Store(e.to_string()))
    }

    /// Appends a new bookmark to the user's collection and persists it.
    ///
    /// Input is expected to have passed validation already; this method does
    /// not re-check it.
    fn add_bookmark(
        &mut self,
        user_id: &str,
        url: &str,
        title: &str,
        description: &str,
    ) -> Result<Bookmark, BookmarkError> {
        let mut bookmarks = self
            .store
            .get_data(user_id)
            .map_err(|e| BookmarkError::Store(e.to_string()))?;

        let now = Self::now();
        let bookmark = Bookmark {
            id: Self::next_id(&bookmarks, now),
            url: url.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            created_at: now,
            likes: 0,
        };

        bookmarks.push(bookmark.clone());
        self.store
            .set_data(user_id, &bookmarks)
            .map_err(|e| BookmarkError::Store(e.to_string()))?;

        Ok(bookmark)
    }

    /// Increments the like count, persisting the whole collection exactly once.
    fn like_bookmark(&mut self, user_id: &str, bookmark_id: i64) -> Result<u32, BookmarkError> {
        let mut bookmarks = self
            .store
            .get_data(user_id)
            .map_err(|e| BookmarkError::Store(e.to_string()))?;

        let likes = match bookmarks.iter_mut().find(|b| b.id == bookmark_id) {
            Some(bookmark) => {
                bookmark.likes += 1;
                bookmark.likes
            }
            None => return Err(BookmarkError::NotFound(bookmark_id)),
        };

        self.store
            .set_data(user_id, &bookmarks)
            .map_err(|e| BookmarkError::Store(e.to_string()))?;

        Ok(likes)
    }
}
