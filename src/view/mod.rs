// sharemarks view layer: pure projection of app state into page markup.

pub mod bookmark_list;
pub mod html;

pub use bookmark_list::{
    build_list_view, list_html, user_options_html, BookmarkEntryView, BookmarkListView,
};
