//! Conversion between local directory paths and their stored form

use crate::HOME_MARK;
use crate::config::StoreConfig;

/// Converts directories to and from the text written in the store
///
/// The stored form abbreviates the home directory to `~` and, in Windows
/// mode, uses `/` so one file can be shared between OS flavors.
#[derive(Debug, Clone, Copy)]
pub struct PathCodec<'a> {
    config: &'a StoreConfig,
}

impl<'a> PathCodec<'a> {
    pub fn new(config: &'a StoreConfig) -> Self {
        Self { config }
    }

    /// Local absolute path to stored text
    pub fn to_store(&self, path: &str) -> String {
        let abbreviated = match self.strip_home(path) {
            Some(rest) => format!("{}{}", HOME_MARK, rest),
            None => path.to_string(),
        };
        if self.config.windows {
            abbreviated.replace('\\', "/")
        } else {
            abbreviated
        }
    }

    /// Stored text to a path usable by the local OS
    pub fn from_store(&self, stored: &str) -> String {
        let local = if self.config.windows {
            stored.replace('/', "\\")
        } else {
            stored.to_string()
        };
        let home = self.home();
        if home.is_empty() {
            return local;
        }
        match local.strip_prefix(HOME_MARK) {
            Some(rest) if rest.is_empty() || rest.starts_with(self.config.separator) => format!("{}{}", home, rest),
            _ => local,
        }
    }

    /// Home directory without trailing separators; empty disables `~`
    fn home(&self) -> &str {
        self.config.home_dir.trim_end_matches(|c| self.is_separator(c))
    }

    /// Remainder of `path` after the home prefix, if it sits at a separator boundary
    fn strip_home<'p>(&self, path: &'p str) -> Option<&'p str> {
        let home = self.home();
        if home.is_empty() {
            return None;
        }
        let rest = path.strip_prefix(home)?;
        match rest.chars().next() {
            None => Some(rest),
            Some(c) if self.is_separator(c) => Some(rest),
            Some(_) => None,
        }
    }

    fn is_separator(&self, c: char) -> bool {
        c == self.config.separator || (self.config.windows && c == '/')
    }
}
