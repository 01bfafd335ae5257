//! Persistence layer for sharemarks.
//!
//! Everything above this module talks to storage through the
//! [`BookmarkStore`] trait: a key-value contract where the key is a user id
//! and the value is that user's entire bookmark collection. `set_data`
//! overwrites the collection wholesale; there are no partial updates.
//!
//! Two backends are provided: [`MemoryStore`] for tests and the console demo,
//! and [`SqliteStore`] for the real application.

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::types::bookmark::Bookmark;
use crate::types::errors::StoreError;

/// User ids every fresh backend starts with, in picker order.
pub const DEMO_USER_IDS: [&str; 5] = ["alice", "bob", "carol", "dan", "erin"];

/// Key-value persistence contract for per-user bookmark collections.
///
/// Implementations must uphold two guarantees:
/// * `get_data` for an unknown user returns an empty collection, never an error.
/// * `set_data` fully replaces whatever was stored before, for any user id,
///   listed by `user_ids` or not.
pub trait BookmarkStore {
    /// Returns the user ids to offer in the picker, in display order.
    fn user_ids(&self) -> Result<Vec<String>, StoreError>;

    /// Returns the given user's bookmark collection (empty if none stored).
    fn get_data(&self, user_id: &str) -> Result<Vec<Bookmark>, StoreError>;

    /// Replaces the given user's bookmark collection with `bookmarks`.
    fn set_data(&mut self, user_id: &str, bookmarks: &[Bookmark]) -> Result<(), StoreError>;
}
