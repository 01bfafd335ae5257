//! UI event controller.
//!
//! Extracted from the WebView shell so the whole interaction flow can be
//! unit-tested without a window. `handle_event` maps one page event to the
//! directives the shell must apply, mutating `App` state on the way.

use crate::app::App;
use crate::managers::bookmark_manager::{BookmarkManager, BookmarkManagerTrait};
use crate::types::errors::BookmarkError;
use crate::validation;
use crate::view;

/// Alert shown when the form is submitted with no user selected.
pub const SELECT_USER_ALERT: &str = "Select a user first!";
/// Label shown on a copy button immediately after a copy.
pub const COPIED_LABEL: &str = "Copied!";
/// Label a copy button reverts to after the reset delay.
pub const COPY_LABEL: &str = "Copy URL";
/// Delay before a copy button's label reverts.
pub const COPY_LABEL_RESET_MS: u64 = 1500;

/// One user interaction, as reported by the page.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// Page finished loading.
    UiReady,
    /// The picker changed; empty `user_id` clears the selection.
    SelectUser { user_id: String },
    SubmitBookmark {
        url: String,
        title: String,
        description: String,
    },
    CopyUrl { bookmark_id: i64 },
    LikeBookmark { bookmark_id: i64 },
    /// Posted by the shell's reset timer, not by the page.
    ResetCopyLabel { bookmark_id: i64 },
}

/// One instruction for the shell to apply to the page.
#[derive(Debug, Clone, PartialEq)]
pub enum UiDirective {
    /// Replace the user picker's options.
    RenderUserOptions { options_html: String },
    /// Replace the bookmark list and set empty-state visibility.
    RenderBookmarks {
        list_html: String,
        show_empty_message: bool,
    },
    ShowFormError { message: String },
    ClearFormError,
    ShowAlert { message: String },
    ResetForm,
    /// Best-effort clipboard write; the shell ignores the outcome.
    CopyToClipboard { url: String },
    SetCopyLabel { bookmark_id: i64, label: String },
    /// Ask the shell to post `ResetCopyLabel` after the delay.
    ScheduleCopyLabelReset { bookmark_id: i64, delay_ms: u64 },
}

/// Handles one event against the app state, returning directives in
/// application order.
pub fn handle_event(app: &mut App, event: UiEvent) -> Vec<UiDirective> {
    match event {
        UiEvent::UiReady => handle_ready(app),
        UiEvent::SelectUser { user_id } => handle_select_user(app, user_id),
        UiEvent::SubmitBookmark {
            url,
            title,
            description,
        } => handle_submit(app, &url, &title, &description),
        UiEvent::CopyUrl { bookmark_id } => handle_copy(app, bookmark_id),
        UiEvent::LikeBookmark { bookmark_id } => handle_like(app, bookmark_id),
        UiEvent::ResetCopyLabel { bookmark_id } => vec![UiDirective::SetCopyLabel {
            bookmark_id,
            label: COPY_LABEL.to_string(),
        }],
    }
}

fn handle_ready(app: &mut App) -> Vec<UiDirective> {
    let mut directives = Vec::new();

    match app.store.user_ids() {
        Ok(ids) => directives.push(UiDirective::RenderUserOptions {
            options_html: view::user_options_html(&ids),
        }),
        Err(e) => {
            eprintln!("[EVT] user list failed: {}", e);
            directives.push(UiDirective::ShowAlert {
                message: format!("Could not load users: {}", e),
            });
        }
    }

    directives.extend(render_list(app));
    directives
}

fn handle_select_user(app: &mut App, user_id: String) -> Vec<UiDirective> {
    app.selected_user = if user_id.is_empty() {
        None
    } else {
        Some(user_id)
    };
    render_list(app)
}

fn handle_submit(app: &mut App, url: &str, title: &str, description: &str) -> Vec<UiDirective> {
    let user_id = match &app.selected_user {
        Some(id) => id.clone(),
        None => {
            return vec![UiDirective::ShowAlert {
                message: SELECT_USER_ALERT.to_string(),
            }]
        }
    };

    if let Err(e) = validation::validate_input(url, title, description) {
        return vec![UiDirective::ShowFormError {
            message: e.to_string(),
        }];
    }

    let mut manager = BookmarkManager::new(&mut *app.store);
    if let Err(e) = manager.add_bookmark(&user_id, url, title, description) {
        eprintln!("[EVT] add bookmark failed: {}", e);
        return vec![UiDirective::ShowAlert {
            message: format!("Could not save bookmark: {}", e),
        }];
    }

    let mut directives = vec![UiDirective::ClearFormError, UiDirective::ResetForm];
    directives.extend(render_list(app));
    directives
}

fn handle_copy(app: &mut App, bookmark_id: i64) -> Vec<UiDirective> {
    let user_id = match &app.selected_user {
        Some(id) => id.clone(),
        None => return Vec::new(),
    };

    let manager = BookmarkManager::new(&mut *app.store);
    let bookmarks = match manager.list_bookmarks(&user_id) {
        Ok(bookmarks) => bookmarks,
        Err(e) => {
            eprintln!("[EVT] copy lookup failed: {}", e);
            return vec![UiDirective::ShowAlert {
                message: format!("Could not read bookmarks: {}", e),
            }];
        }
    };

    match bookmarks.iter().find(|b| b.id == bookmark_id) {
        Some(bookmark) => vec![
            UiDirective::CopyToClipboard {
                url: bookmark.url.clone(),
            },
            UiDirective::SetCopyLabel {
                bookmark_id,
                label: COPIED_LABEL.to_string(),
            },
            UiDirective::ScheduleCopyLabelReset {
                bookmark_id,
                delay_ms: COPY_LABEL_RESET_MS,
            },
        ],
        None => {
            eprintln!("[EVT] copy of unknown bookmark {}", bookmark_id);
            Vec::new()
        }
    }
}

fn handle_like(app: &mut App, bookmark_id: i64) -> Vec<UiDirective> {
    let user_id = match &app.selected_user {
        Some(id) => id.clone(),
        None => return Vec::new(),
    };

    let mut manager = BookmarkManager::new(&mut *app.store);
    match manager.like_bookmark(&user_id, bookmark_id) {
        Ok(_) => render_list(app),
        Err(BookmarkError::NotFound(id)) => {
            eprintln!("[EVT] like of unknown bookmark {}", id);
            Vec::new()
        }
        Err(e) => {
            eprintln!("[EVT] like failed: {}", e);
            vec![UiDirective::ShowAlert {
                message: format!("Could not save like: {}", e),
            }]
        }
    }
}

/// Rebuilds the list area for the current selection. The page applies this
/// as a wholesale replacement; there is no diffing.
fn render_list(app: &mut App) -> Vec<UiDirective> {
    let (list_view, read_error) = match app.selected_user.clone() {
        Some(user_id) => {
            let manager = BookmarkManager::new(&mut *app.store);
            match manager.list_bookmarks(&user_id) {
                Ok(bookmarks) => (view::build_list_view(Some(&user_id), &bookmarks), None),
                Err(e) => {
                    eprintln!("[EVT] list failed for {}: {}", user_id, e);
                    (view::build_list_view(Some(&user_id), &[]), Some(e))
                }
            }
        }
        None => (view::build_list_view(None, &[]), None),
    };

    let mut directives = vec![UiDirective::RenderBookmarks {
        list_html: view::list_html(&list_view),
        show_empty_message: list_view.show_empty_message,
    }];

    if let Some(e) = read_error {
        directives.push(UiDirective::ShowAlert {
            message: format!("Could not read bookmarks: {}", e),
        });
    }

    directives
}
