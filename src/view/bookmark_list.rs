//! Bookmark list rendering.
//!
//! Pure functions from app state to view models to HTML fragments. The page
//! replaces container contents wholesale with the returned markup; nothing
//! here touches the store or the WebView.

use chrono::{SecondsFormat, TimeZone, Utc};

use crate::types::bookmark::Bookmark;
use crate::view::html::Element;

/// One rendered bookmark entry.
#[derive(Debug, Clone, PartialEq)]
pub struct BookmarkEntryView {
    pub id: i64,
    pub url: String,
    pub title: String,
    pub description: String,
    /// RFC 3339 timestamp for the `datetime` attribute.
    pub created_at_iso: String,
    /// Short UTC timestamp shown to the user.
    pub created_at_display: String,
    pub likes: u32,
}

/// The whole list area: entries plus empty-state visibility.
#[derive(Debug, Clone, PartialEq)]
pub struct BookmarkListView {
    pub entries: Vec<BookmarkEntryView>,
    pub show_empty_message: bool,
}

/// Builds the list view for the given selection.
///
/// With no user selected both the list and the empty-state message are
/// hidden. Entries are ordered newest first; equal timestamps fall back to
/// descending id so the order is deterministic.
pub fn build_list_view(user_id: Option<&str>, bookmarks: &[Bookmark]) -> BookmarkListView {
    if user_id.is_none() {
        return BookmarkListView {
            entries: Vec::new(),
            show_empty_message: false,
        };
    }

    if bookmarks.is_empty() {
        return BookmarkListView {
            entries: Vec::new(),
            show_empty_message: true,
        };
    }

    let mut sorted: Vec<&Bookmark> = bookmarks.iter().collect();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

    BookmarkListView {
        entries: sorted.into_iter().map(entry_view).collect(),
        show_empty_message: false,
    }
}

/// Renders the view's entries as `<li>` fragments for the list container.
pub fn list_html(view: &BookmarkListView) -> String {
    let mut out = String::new();
    for entry in &view.entries {
        out.push_str(&entry_html(entry));
    }
    out
}

/// Renders the user picker's `<option>` elements, placeholder first.
pub fn user_options_html(user_ids: &[String]) -> String {
    let mut out = Element::new("option")
        .attr("value", "")
        .text("-- Select a user --")
        .to_html();
    for id in user_ids {
        out.push_str(&Element::new("option").attr("value", id).text(id).to_html());
    }
    out
}

fn entry_view(bookmark: &Bookmark) -> BookmarkEntryView {
    let (iso, display) = format_timestamps(bookmark.created_at);
    BookmarkEntryView {
        id: bookmark.id,
        url: bookmark.url.clone(),
        title: bookmark.title.clone(),
        description: bookmark.description.clone(),
        created_at_iso: iso,
        created_at_display: display,
        likes: bookmark.likes,
    }
}

fn entry_html(entry: &BookmarkEntryView) -> String {
    let id = entry.id.to_string();

    let article = Element::new("article")
        .child(
            Element::new("h3").child(
                Element::new("a")
                    .attr("href", &entry.url)
                    .attr("target", "_blank")
                    .text(&entry.title),
            ),
        )
        .child(Element::new("p").text(&entry.description))
        .child(
            Element::new("time")
                .attr("datetime", &entry.created_at_iso)
                .text(&format!("Added on: {}", entry.created_at_display)),
        )
        .child(
            Element::new("div")
                .attr("class", "actions")
                .child(
                    Element::new("button")
                        .attr("class", "copy-btn")
                        .attr("data-id", &id)
                        .text("Copy URL"),
                )
                .child(
                    Element::new("button")
                        .attr("class", "like-btn")
                        .attr("data-id", &id)
                        .text(&format!("Like ({})", entry.likes)),
                ),
        );

    Element::new("li")
        .child(article)
        .child(Element::new("hr"))
        .to_html()
}

/// Formats a millisecond timestamp as (RFC 3339, short display), both UTC.
/// Out-of-range values render as empty strings rather than panicking.
fn format_timestamps(millis: i64) -> (String, String) {
    match Utc.timestamp_millis_opt(millis).single() {
        Some(dt) => (
            dt.to_rfc3339_opts(SecondsFormat::Millis, true),
            dt.format("%Y-%m-%d %H:%M").to_string(),
        ),
        None => (String::new(), String::new()),
    }
}
