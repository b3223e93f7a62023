//! Bookmark store error types

use std::path::PathBuf;
use thiserror::Error;

/// Result alias for bookmark store operations
pub type Result<T> = std::result::Result<T, BookmarkError>;

/// Errors that can occur during bookmark operations
///
/// An unmatched lookup is not an error: `resolve` hands back the caller's
/// default and `find` returns `None`.
#[derive(Debug, Error)]
pub enum BookmarkError {
    #[error("Invalid bookmark key '{key}': {reason}")]
    InvalidKey { key: String, reason: String },

    #[error("Bookmark store {path} is unavailable: {source}")]
    StorageUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl BookmarkError {
    pub(crate) fn invalid_key(key: &str, reason: impl Into<String>) -> Self {
        BookmarkError::InvalidKey {
            key: key.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn storage(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BookmarkError::StorageUnavailable {
            path: path.into(),
            source,
        }
    }

    /// Check if the key was rejected before any file access
    pub fn is_invalid_key(&self) -> bool {
        matches!(self, BookmarkError::InvalidKey { .. })
    }
}
