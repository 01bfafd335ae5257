//! Unit tests for the BookmarkManager public API.
//!
//! These tests exercise listing, creation, and like counting through the
//! `BookmarkManagerTrait` interface over an in-memory store, including a
//! counting store double that pins the number of persistence calls.

use sharemarks::managers::bookmark_manager::{BookmarkManager, BookmarkManagerTrait};
use sharemarks::storage::{BookmarkStore, MemoryStore};
use sharemarks::types::bookmark::Bookmark;
use sharemarks::types::errors::{BookmarkError, StoreError};

/// Store double that wraps `MemoryStore` and counts `set_data` calls.
struct CountingStore {
    inner: MemoryStore,
    set_data_calls: usize,
}

impl CountingStore {
    fn new() -> Self {
        Self {
            inner: MemoryStore::with_demo_users(),
            set_data_calls: 0,
        }
    }
}

impl BookmarkStore for CountingStore {
    fn user_ids(&self) -> Result<Vec<String>, StoreError> {
        self.inner.user_ids()
    }

    fn get_data(&self, user_id: &str) -> Result<Vec<Bookmark>, StoreError> {
        self.inner.get_data(user_id)
    }

    fn set_data(&mut self, user_id: &str, bookmarks: &[Bookmark]) -> Result<(), StoreError> {
        self.set_data_calls += 1;
        self.inner.set_data(user_id, bookmarks)
    }
}

#[test]
fn test_add_bookmark_fills_fields_and_persists() {
    let mut store = MemoryStore::with_demo_users();
    let before = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_millis() as i64;

    let added = {
        let mut mgr = BookmarkManager::new(&mut store);
        mgr.add_bookmark("alice", "https://example.com", "Example", "A site")
            .unwrap()
    };

    assert_eq!(added.url, "https://example.com");
    assert_eq!(added.title, "Example");
    assert_eq!(added.description, "A site");
    assert_eq!(added.likes, 0);
    assert!(added.created_at >= before);
    assert!(added.id >= added.created_at);

    let stored = store.get_data("alice").unwrap();
    assert_eq!(stored, vec![added]);
}

#[test]
fn test_add_bookmark_appends_to_existing_collection() {
    let mut store = MemoryStore::with_demo_users();
    let mut mgr = BookmarkManager::new(&mut store);

    let first = mgr
        .add_bookmark("alice", "https://one.example.com", "One", "First")
        .unwrap();
    let second = mgr
        .add_bookmark("alice", "https://two.example.com", "Two", "Second")
        .unwrap();

    let stored = mgr.list_bookmarks("alice").unwrap();
    assert_eq!(stored.len(), 2);
    assert_eq!(stored[0].id, first.id);
    assert_eq!(stored[1].id, second.id);
}

/// Ids must stay unique even when the clock cannot tell two adds apart:
/// a new id is always greater than every existing one.
#[test]
fn test_add_bookmark_bumps_id_past_existing_ones() {
    let far_future = i64::MAX / 2;
    let mut store = MemoryStore::with_demo_users();
    store
        .set_data(
            "alice",
            &[Bookmark {
                id: far_future,
                url: "https://example.com".to_string(),
                title: "From the future".to_string(),
                description: "Existing".to_string(),
                created_at: far_future,
                likes: 0,
            }],
        )
        .unwrap();

    let mut mgr = BookmarkManager::new(&mut store);
    let added = mgr
        .add_bookmark("alice", "https://example.org", "New", "Later")
        .unwrap();

    assert_eq!(added.id, far_future + 1);
}

/// Stores accept any id via `set_data`, including `i64::MAX`. The bump past
/// the highest existing id saturates there instead of overflowing.
#[test]
fn test_add_bookmark_saturates_at_the_id_ceiling() {
    let mut store = MemoryStore::with_demo_users();
    store
        .set_data(
            "alice",
            &[Bookmark {
                id: i64::MAX,
                url: "https://example.com".to_string(),
                title: "Ceiling".to_string(),
                description: "Existing".to_string(),
                created_at: 0,
                likes: 0,
            }],
        )
        .unwrap();

    let mut mgr = BookmarkManager::new(&mut store);
    let added = mgr
        .add_bookmark("alice", "https://example.org", "New", "Later")
        .unwrap();

    assert_eq!(added.id, i64::MAX);
    assert_eq!(mgr.list_bookmarks("alice").unwrap().len(), 2);
}

#[test]
fn test_rapid_adds_never_collide() {
    let mut store = MemoryStore::with_demo_users();
    let mut mgr = BookmarkManager::new(&mut store);

    for i in 0..20 {
        mgr.add_bookmark(
            "bob",
            "https://example.com",
            &format!("Bookmark {}", i),
            "Rapid",
        )
        .unwrap();
    }

    let stored = mgr.list_bookmarks("bob").unwrap();
    let mut ids: Vec<i64> = stored.iter().map(|b| b.id).collect();
    let total = ids.len();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), total, "every bookmark id must be unique");
}

#[test]
fn test_like_bookmark_increments_and_returns_count() {
    let mut store = MemoryStore::with_demo_users();
    let mut mgr = BookmarkManager::new(&mut store);

    let added = mgr
        .add_bookmark("alice", "https://example.com", "Example", "A site")
        .unwrap();

    assert_eq!(mgr.like_bookmark("alice", added.id).unwrap(), 1);
    assert_eq!(mgr.like_bookmark("alice", added.id).unwrap(), 2);

    let stored = mgr.list_bookmarks("alice").unwrap();
    assert_eq!(stored[0].likes, 2);
}

#[test]
fn test_like_unknown_bookmark_is_not_found_and_writes_nothing() {
    let mut store = CountingStore::new();
    {
        let mut mgr = BookmarkManager::new(&mut store);
        match mgr.like_bookmark("alice", 12345) {
            Err(BookmarkError::NotFound(id)) => assert_eq!(id, 12345),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }
    assert_eq!(store.set_data_calls, 0);
}

/// Each like performs exactly one `set_data` call carrying the whole
/// updated collection.
#[test]
fn test_like_persists_exactly_once_per_call() {
    let mut store = CountingStore::new();
    let id = {
        let mut mgr = BookmarkManager::new(&mut store);
        mgr.add_bookmark("alice", "https://example.com", "Example", "A site")
            .unwrap()
            .id
    };
    assert_eq!(store.set_data_calls, 1);

    {
        let mut mgr = BookmarkManager::new(&mut store);
        mgr.like_bookmark("alice", id).unwrap();
    }
    assert_eq!(store.set_data_calls, 2);

    let stored = store.get_data("alice").unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].likes, 1);
}

#[test]
fn test_list_bookmarks_for_unknown_user_is_empty() {
    let mut store = MemoryStore::with_demo_users();
    let mgr = BookmarkManager::new(&mut store);
    assert!(mgr.list_bookmarks("nobody").unwrap().is_empty());
}
