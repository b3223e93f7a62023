//! Core BookmarkStore implementation

use log::{debug, info, warn};
use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::config::StoreConfig;
use crate::error::{BookmarkError, Result};
use crate::key_codec::KeyCodec;
use crate::line::BookmarkLine;
use crate::path_codec::PathCodec;
use crate::{APP_NAME, APP_VERSION, COMMENT_MARK, CURRENT_DIR_MARK, HOME_MARK, HOMEPAGE};

/// Prefix of the temp file staged next to the store during a rewrite
const TEMP_PREFIX: &str = ".dirbook";

/// The bookmark table backed by a single text file
///
/// Holds no cached content: every read scans the file and every mutation
/// rewrites it, so short-lived invocations always see the latest state.
pub struct BookmarkStore {
    /// Path of the store file
    path: PathBuf,
    /// Environment used by the codecs
    config: StoreConfig,
}

impl BookmarkStore {
    /// Bind a store to a file; no I/O happens until an operation runs
    pub fn open(path: impl AsRef<Path>, config: StoreConfig) -> Self {
        let path = path.as_ref().to_path_buf();
        debug!("Opened bookmark store at {}", path.display());
        Self { path, config }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Create an empty store file if none exists
    pub fn ensure_file(&self) -> Result<()> {
        if self.path.is_file() {
            return Ok(());
        }
        match OpenOptions::new().write(true).create_new(true).open(&self.path) {
            Ok(_) => {
                info!("Created bookmark store {}", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists && self.path.is_file() => Ok(()),
            Err(e) => Err(BookmarkError::storage(&self.path, e)),
        }
    }

    /// Resolve a lookup key to a local directory, or return `default`
    ///
    /// The key may carry a sub-path (`proj/src`) which is appended to the
    /// resolved directory. `.` and `~` never touch the file.
    pub fn resolve(&self, key: &str, default: &str) -> Result<String> {
        Ok(self.find(key)?.unwrap_or_else(|| default.to_string()))
    }

    /// Like [`BookmarkStore::resolve`], with `None` for an unknown key
    pub fn find(&self, key: &str) -> Result<Option<String>> {
        let (registered, suffix) = KeyCodec::new(&self.config).split(key);
        match registered {
            CURRENT_DIR_MARK => return Ok(Some(format!("{}{}", self.config.current_dir, suffix))),
            HOME_MARK => return Ok(Some(format!("{}{}", self.config.home_dir, suffix))),
            _ => {}
        }

        let Some(reader) = self.reader()? else {
            debug!("Store {} does not exist, key '{}' not found", self.path.display(), key);
            return Ok(None);
        };
        for line in reader.lines() {
            let line = line.map_err(|e| BookmarkError::storage(&self.path, e))?;
            if let Some(entry) = BookmarkLine::parse(&line)
                && entry.key == registered
            {
                let directory = PathCodec::new(&self.config).from_store(&entry.directory);
                debug!("Resolved '{}' to {}{}", registered, directory, suffix);
                return Ok(Some(directory + suffix));
            }
        }
        Ok(None)
    }

    /// All bookmark lines as written, sorted by their full text
    ///
    /// Windows mode shows `\` in place of the stored `/`.
    pub fn list_all(&self) -> Result<Vec<String>> {
        let lines = self.data_lines()?;
        if self.config.windows {
            Ok(lines.into_iter().map(|line| line.replace('/', "\\")).collect())
        } else {
            Ok(lines)
        }
    }

    /// Parsed bookmarks in listing order
    pub fn entries(&self) -> Result<Vec<BookmarkLine>> {
        Ok(self
            .data_lines()?
            .iter()
            .filter_map(|line| BookmarkLine::parse(line))
            .collect())
    }

    /// All registered keys in listing order
    pub fn keys(&self) -> Result<Vec<String>> {
        Ok(self.entries()?.into_iter().map(|entry| entry.key).collect())
    }

    /// Add or replace a bookmark; an empty `directory` deletes `key`
    ///
    /// `.` as the directory means the working directory. The whole file is
    /// rewritten: a fresh header, the new line, then every other bookmark in
    /// sorted order.
    pub fn save(&self, directory: &str, key: &str, comments: &[String]) -> Result<()> {
        KeyCodec::new(&self.config).validate(key)?;

        let directory = if directory == CURRENT_DIR_MARK {
            self.config.current_dir.as_str()
        } else {
            directory
        };

        self.ensure_file()?;
        let survivors: Vec<String> = self
            .data_lines()?
            .into_iter()
            .filter(|line| BookmarkLine::key_of(line) != key)
            .collect();

        let mut content = format!("{}\n", header());
        if !directory.is_empty() {
            let stored = PathCodec::new(&self.config).to_store(directory);
            let line = BookmarkLine::new(key, stored, comments);
            content.push_str(&line.to_string());
            content.push('\n');
        }
        for line in &survivors {
            content.push_str(line);
            content.push('\n');
        }

        self.rewrite(&content)?;
        if directory.is_empty() {
            info!("Deleted bookmark '{}'", key);
        } else {
            info!("Saved bookmark '{}' -> {}", key, directory);
        }
        Ok(())
    }

    /// Remove a bookmark; removing an unknown key still normalizes the file
    pub fn delete(&self, key: &str) -> Result<()> {
        self.save("", key, &[])
    }

    /// Open the store for reading; a missing file is an empty table
    fn reader(&self) -> Result<Option<BufReader<File>>> {
        match File::open(&self.path) {
            Ok(file) => Ok(Some(BufReader::new(file))),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(BookmarkError::storage(&self.path, e)),
        }
    }

    /// Non-comment, non-blank lines, sorted
    fn data_lines(&self) -> Result<Vec<String>> {
        let Some(reader) = self.reader()? else {
            return Ok(Vec::new());
        };
        let mut lines = Vec::new();
        for line in reader.lines() {
            let line = line.map_err(|e| BookmarkError::storage(&self.path, e))?;
            if BookmarkLine::is_data(&line) {
                lines.push(line);
            }
        }
        lines.sort();
        Ok(lines)
    }

    /// Replace the store with `content` through a temp file and a rename
    ///
    /// The temp file lives in the store's directory so the rename stays on
    /// one filesystem. Dropping it on any earlier error deletes it and leaves
    /// the store untouched.
    fn rewrite(&self, content: &str) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut temp = tempfile::Builder::new()
            .prefix(TEMP_PREFIX)
            .tempfile_in(dir)
            .map_err(|e| BookmarkError::storage(dir, e))?;
        temp.write_all(content.as_bytes())
            .and_then(|_| temp.as_file().sync_all())
            .map_err(|e| BookmarkError::storage(temp.path(), e))?;

        // Keep the mode of the file being replaced; temp files start as 0600
        #[cfg(unix)]
        {
            match std::fs::metadata(&self.path) {
                Ok(meta) => temp
                    .as_file()
                    .set_permissions(meta.permissions())
                    .map_err(|e| BookmarkError::storage(&self.path, e))?,
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => return Err(BookmarkError::storage(&self.path, e)),
            }
        }

        let staged = temp.path().to_path_buf();
        temp.persist(&self.path)
            .map_err(|e| BookmarkError::storage(&self.path, e.error))?;

        // Make the rename itself durable
        #[cfg(unix)]
        {
            if let Err(e) = File::open(dir).and_then(|parent| parent.sync_all()) {
                warn!("Failed to sync directory {}: {}", dir.display(), e);
            }
        }

        debug!("Replaced {} with {}", self.path.display(), staged.display());
        Ok(())
    }
}

/// First line of every rewritten store
fn header() -> String {
    format!("{} {} {} ({})", COMMENT_MARK, APP_NAME, APP_VERSION, HOMEPAGE)
}
