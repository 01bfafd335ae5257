//! Unit tests for the `BookmarkStore` backends.
//!
//! Both backends are driven through the trait so their observable behavior
//! stays interchangeable. The SQLite backend additionally gets a
//! close-and-reopen test against a real file via `tempfile`.

use tempfile::TempDir;

use sharemarks::storage::{BookmarkStore, MemoryStore, SqliteStore, DEMO_USER_IDS};
use sharemarks::types::bookmark::Bookmark;

fn sample(id: i64, title: &str) -> Bookmark {
    Bookmark {
        id,
        url: format!("https://example.com/{}", id),
        title: title.to_string(),
        description: format!("Bookmark number {}", id),
        created_at: id,
        likes: 0,
    }
}

/// Shared contract checks, run against any backend.
fn exercise_store(store: &mut dyn BookmarkStore) {
    // Unknown user reads empty, never errors
    assert!(store.get_data("nobody").unwrap().is_empty());

    // Round-trip for a listed user
    let bookmarks = vec![sample(1, "First"), sample(2, "Second")];
    store.set_data("alice", &bookmarks).unwrap();
    assert_eq!(store.get_data("alice").unwrap(), bookmarks);

    // Users are isolated
    assert!(store.get_data("bob").unwrap().is_empty());

    // set_data overwrites wholesale
    store.set_data("alice", &[sample(3, "Only")]).unwrap();
    let stored = store.get_data("alice").unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].title, "Only");

    // Unlisted user ids are accepted without touching the picker
    store.set_data("mallory", &[sample(4, "Theirs")]).unwrap();
    assert_eq!(store.get_data("mallory").unwrap().len(), 1);
    assert!(!store.user_ids().unwrap().contains(&"mallory".to_string()));

    // Writing an empty collection clears the user's data
    store.set_data("alice", &[]).unwrap();
    assert!(store.get_data("alice").unwrap().is_empty());
}

#[test]
fn test_memory_store_contract() {
    let mut store = MemoryStore::with_demo_users();
    exercise_store(&mut store);
}

#[test]
fn test_sqlite_store_contract() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    exercise_store(&mut store);
}

#[test]
fn test_both_backends_seed_the_same_demo_users() {
    let memory = MemoryStore::with_demo_users();
    let sqlite = SqliteStore::open_in_memory().unwrap();
    assert_eq!(memory.user_ids().unwrap(), sqlite.user_ids().unwrap());
    assert_eq!(
        memory.user_ids().unwrap(),
        DEMO_USER_IDS
            .iter()
            .map(|u| u.to_string())
            .collect::<Vec<_>>()
    );
}

#[test]
fn test_memory_store_lists_custom_users_in_order() {
    let store = MemoryStore::new(&["zoe", "abe"]);
    assert_eq!(store.user_ids().unwrap(), vec!["zoe", "abe"]);
}

/// Data written through the SQLite backend must survive closing and
/// reopening the database file.
#[test]
fn test_sqlite_store_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("sharemarks.db");

    let bookmarks = vec![sample(10, "Persistent"), sample(20, "Also persistent")];
    {
        let mut store = SqliteStore::open(&db_path).unwrap();
        store.set_data("carol", &bookmarks).unwrap();
    }

    let store = SqliteStore::open(&db_path).unwrap();
    assert_eq!(store.get_data("carol").unwrap(), bookmarks);
    // Reopening must not re-seed over existing users either
    assert_eq!(store.user_ids().unwrap().len(), DEMO_USER_IDS.len());
}

#[test]
fn test_sqlite_store_round_trips_unicode_and_markup() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    let bookmark = Bookmark {
        id: 7,
        url: "https://example.com/?q=\"quoted\"&x=<y>".to_string(),
        title: "Tтова е <b>заглавие</b> 🔖".to_string(),
        description: "Line one\nLine two with 'quotes'".to_string(),
        created_at: 7,
        likes: 42,
    };
    store.set_data("dan", &[bookmark.clone()]).unwrap();
    assert_eq!(store.get_data("dan").unwrap(), vec![bookmark]);
}
