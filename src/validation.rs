//! Form validation for new bookmarks.
//!
//! Pure checks, no side effects. The controller maps the error to its
//! user-facing message via `Display`.

use url::Url;

use crate::types::errors::ValidationError;

/// Validates new-bookmark form input.
///
/// Title and description must contain non-whitespace characters; the URL
/// must parse as an absolute URL. The empty-field check runs first, so a
/// blank title is reported even when the URL is also bad.
pub fn validate_input(url: &str, title: &str, description: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() || description.trim().is_empty() {
        return Err(ValidationError::EmptyFields);
    }
    if Url::parse(url).is_err() {
        return Err(ValidationError::InvalidUrl);
    }
    Ok(())
}
