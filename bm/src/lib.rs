//! DirBookmarks - persistent directory bookmarks
//!
//! Maps short keys to directories in a plain, hand-editable text file so a
//! shell can jump to a location with one token (`cdf proj`, `cdf proj/src`).
//!
//! # Store format
//!
//! ```text
//! # dirbookmarks 0.1.0 (https://github.com/pponec/DirectoryBookmarks)
//! proj	~/work/project	# main checkout
//! tmp	/tmp
//! ```
//!
//! One bookmark per line: key, tab, stored directory, and an optional
//! tab-delimited `# comment`. Lines starting with `#` are ignored on read.
//! Every mutation rewrites the whole file through a temp file in the same
//! directory followed by an atomic rename.
//!
//! # Example
//!
//! ```ignore
//! use dirbookmarks::{BookmarkStore, Platform, StoreConfig};
//!
//! let config = StoreConfig::detect(Platform::Auto)?;
//! let store = BookmarkStore::open("/home/me/.directory-bookmarks.csv", config);
//! store.save("/home/me/work/project", "proj", &["main".to_string()])?;
//! assert_eq!(store.resolve("proj/src", "")?, "/home/me/work/project/src");
//! ```

pub mod cli;
pub mod config;
mod error;
mod key_codec;
mod line;
pub mod maintenance;
mod path_codec;
pub mod shell;
mod store;

pub use config::{Config, Platform, StoreConfig};
pub use error::{BookmarkError, Result};
pub use key_codec::KeyCodec;
pub use line::BookmarkLine;
pub use maintenance::{PrunedBookmark, prune_missing, reverse_lookup};
pub use path_codec::PathCodec;
pub use shell::{Shell, integration_script};
pub use store::BookmarkStore;

/// Tool name written into the store header
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");

/// Tool version written into the store header
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Project homepage written into the store header
pub const HOMEPAGE: &str = env!("CARGO_PKG_HOMEPAGE");

/// File name of the store inside the home directory
pub const DEFAULT_STORE_NAME: &str = ".directory-bookmarks.csv";

/// Separator between the key, directory and comment fields
pub const FIELD_SEPARATOR: char = '\t';

/// Marks a whole-line comment, or an inline comment after a field separator
pub const COMMENT_MARK: char = '#';

/// Reserved key resolving to the working directory
pub const CURRENT_DIR_MARK: &str = ".";

/// Reserved key (and stored prefix) for the home directory
pub const HOME_MARK: &str = "~";
