//! Bookmark key validation and sub-path splitting

use crate::config::StoreConfig;
use crate::error::{BookmarkError, Result};
use crate::{CURRENT_DIR_MARK, FIELD_SEPARATOR, HOME_MARK};

/// Validates keys and splits lookup keys at the active path separator
#[derive(Debug, Clone, Copy)]
pub struct KeyCodec {
    separator: char,
}

impl KeyCodec {
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            separator: config.separator,
        }
    }

    /// Reject keys that would make the stored line ambiguous
    pub fn validate(&self, key: &str) -> Result<()> {
        if key.is_empty() {
            return Err(BookmarkError::invalid_key(key, "the key is empty"));
        }
        if key.contains(FIELD_SEPARATOR) {
            return Err(BookmarkError::invalid_key(key, "the key contains a tab"));
        }
        if key.contains(self.separator) {
            return Err(BookmarkError::invalid_key(
                key,
                format!("the key contains the path separator '{}'", self.separator),
            ));
        }
        if key.contains(['\n', '\r']) {
            return Err(BookmarkError::invalid_key(key, "the key contains a line break"));
        }
        if Self::is_reserved(key) {
            return Err(BookmarkError::invalid_key(key, "the key is reserved"));
        }
        Ok(())
    }

    /// Split `proj/src` into the registered key `proj` and the suffix `/src`
    ///
    /// The suffix keeps its leading separator and is empty when the key has
    /// no separator.
    pub fn split<'k>(&self, lookup_key: &'k str) -> (&'k str, &'k str) {
        match lookup_key.find(self.separator) {
            Some(idx) => lookup_key.split_at(idx),
            None => (lookup_key, ""),
        }
    }

    /// `.` and `~` resolve without reading the store
    pub fn is_reserved(key: &str) -> bool {
        key == CURRENT_DIR_MARK || key == HOME_MARK
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Platform;

    fn linux() -> KeyCodec {
        KeyCodec::new(&StoreConfig::new("/home/u", "/tmp", Platform::Linux))
    }

    fn windows() -> KeyCodec {
        KeyCodec::new(&StoreConfig::new("C:\\Users\\u", "C:\\", Platform::Windows))
    }

    #[test]
    fn test_validate_accepts_plain_keys() {
        let codec = linux();
        assert!(codec.validate("proj").is_ok());
        assert!(codec.validate("my-app_2").is_ok());
        assert!(codec.validate("..").is_ok());
    }

    #[test]
    fn test_validate_rejects_separators() {
        let codec = linux();
        assert!(codec.validate("a\tb").unwrap_err().is_invalid_key());
        assert!(codec.validate("a/b").unwrap_err().is_invalid_key());
        assert!(codec.validate("a\nb").unwrap_err().is_invalid_key());
        assert!(codec.validate("").unwrap_err().is_invalid_key());
    }

    #[test]
    fn test_validate_rejects_reserved() {
        let codec = linux();
        assert!(codec.validate(".").is_err());
        assert!(codec.validate("~").is_err());
    }

    #[test]
    fn test_separator_follows_platform() {
        // On Windows the backslash is reserved and the slash is a plain character
        let codec = windows();
        assert!(codec.validate("a\\b").is_err());
        assert!(codec.validate("a/b").is_ok());
        assert_eq!(codec.split("proj\\src"), ("proj", "\\src"));
        assert_eq!(codec.split("proj/src"), ("proj/src", ""));
    }

    #[test]
    fn test_split() {
        let codec = linux();
        assert_eq!(codec.split("proj"), ("proj", ""));
        assert_eq!(codec.split("proj/src"), ("proj", "/src"));
        assert_eq!(codec.split("proj/src/main"), ("proj", "/src/main"));
        assert_eq!(codec.split("proj/"), ("proj", "/"));
        assert_eq!(codec.split("~/docs"), ("~", "/docs"));
    }
}
