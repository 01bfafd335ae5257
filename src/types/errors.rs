use std::fmt;

// === ValidationError ===

/// Errors produced by bookmark form validation.
///
/// `Display` renders the exact message shown to the user next to the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Title or description is empty or whitespace-only.
    EmptyFields,
    /// The URL does not parse as an absolute URL.
    InvalidUrl,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyFields => {
                write!(f, "Title and Description cannot be empty.")
            }
            ValidationError::InvalidUrl => {
                write!(f, "Please provide a valid URL (e.g., https://google.com).")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

// === StoreError ===

/// Errors related to the bookmark storage backend.
#[derive(Debug)]
pub enum StoreError {
    /// Database operation failed.
    Database(String),
    /// Failed to serialize or deserialize a bookmark collection.
    Serialization(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Database(msg) => write!(f, "Store database error: {}", msg),
            StoreError::Serialization(msg) => {
                write!(f, "Store serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for StoreError {}

// === BookmarkError ===

/// Errors related to bookmark operations.
#[derive(Debug)]
pub enum BookmarkError {
    /// Bookmark with the given id was not found in the user's collection.
    NotFound(i64),
    /// The storage backend failed.
    Store(String),
}

impl fmt::Display for BookmarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookmarkError::NotFound(id) => write!(f, "Bookmark not found: {}", id),
            BookmarkError::Store(msg) => write!(f, "Bookmark store error: {}", msg),
        }
    }
}

impl std::error::Error for BookmarkError {}
