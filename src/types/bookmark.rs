use serde::{Deserialize, Serialize};

/// A saved bookmark inside one user's collection.
///
/// `id` and `created_at` are millisecond UNIX timestamps. `id` doubles as
/// the unique key within the owning collection; uniqueness is guaranteed by
/// `BookmarkManager::add_bookmark`, which bumps the id past any existing one
/// when two bookmarks are created within the same millisecond.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bookmark {
    pub id: i64,
    pub url: String,
    pub title: String,
    pub description: String,
    pub created_at: i64,
    /// Like count, never negative. Absent in collections written before
    /// likes existed, hence the serde default.
    #[serde(default)]
    pub likes: u32,
}
