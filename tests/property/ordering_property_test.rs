//! Property-based tests for bookmark list ordering.
//!
//! These tests verify that `build_list_view` renders every bookmark exactly
//! once, newest first with descending id as the tie-break, for arbitrary
//! collections with colliding timestamps.

use proptest::prelude::*;
use sharemarks::types::bookmark::Bookmark;
use sharemarks::view::build_list_view;

fn bookmark(id: i64, created_at: i64, likes: u32) -> Bookmark {
    Bookmark {
        id,
        url: format!("https://example.com/{}", id),
        title: format!("Entry {}", id),
        description: "Generated".to_string(),
        created_at,
        likes,
    }
}

// **Property 1: newest first, ids break ties**
//
// *For any* collection, the rendered entries SHALL be exactly the input
// bookmarks ordered by descending creation time, with descending id
// deciding between equal timestamps.
//
// Timestamps are drawn from a tiny range so collisions actually happen;
// the btree_map keys keep ids unique the way `add_bookmark` guarantees.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    #[test]
    fn list_view_orders_newest_first(
        by_id in proptest::collection::btree_map(0..100i64, 0..8i64, 0..12),
    ) {
        let bookmarks: Vec<Bookmark> = by_id
            .iter()
            .map(|(&id, &created_at)| bookmark(id, created_at, 0))
            .collect();

        let view = build_list_view(Some("alice"), &bookmarks);
        prop_assert_eq!(view.entries.len(), bookmarks.len());
        prop_assert_eq!(view.show_empty_message, bookmarks.is_empty());

        // Every input id appears exactly once
        let mut rendered_ids: Vec<i64> = view.entries.iter().map(|e| e.id).collect();
        rendered_ids.sort_unstable();
        let expected_ids: Vec<i64> = by_id.keys().copied().collect();
        prop_assert_eq!(rendered_ids, expected_ids);

        for pair in view.entries.windows(2) {
            let first = by_id[&pair[0].id];
            let second = by_id[&pair[1].id];
            prop_assert!(
                first > second || (first == second && pair[0].id > pair[1].id),
                "entry {} (created {}) rendered before entry {} (created {})",
                pair[0].id,
                first,
                pair[1].id,
                second
            );
        }
    }

    // **Property 2: entries carry their bookmark's fields**
    //
    // *For any* collection, each rendered entry SHALL keep the url, title,
    // and like count of the bookmark it was built from, wherever sorting
    // moved it.
    #[test]
    fn entries_preserve_bookmark_fields(
        by_id in proptest::collection::btree_map(0..100i64, (0..8i64, any::<u32>()), 1..12),
    ) {
        let bookmarks: Vec<Bookmark> = by_id
            .iter()
            .map(|(&id, &(created_at, likes))| bookmark(id, created_at, likes))
            .collect();

        let view = build_list_view(Some("alice"), &bookmarks);
        for entry in &view.entries {
            let (_, likes) = by_id[&entry.id];
            prop_assert_eq!(entry.likes, likes);
            prop_assert_eq!(&entry.url, &format!("https://example.com/{}", entry.id));
            prop_assert_eq!(&entry.title, &format!("Entry {}", entry.id));
        }
    }
}
