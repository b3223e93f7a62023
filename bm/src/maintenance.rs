//! Maintenance operations built on the public store API
//!
//! - [`prune_missing`] drops bookmarks whose directory is gone
//! - [`reverse_lookup`] answers "which keys point here?"

use log::{info, warn};
use std::path::Path;

use crate::error::Result;
use crate::key_codec::KeyCodec;
use crate::store::BookmarkStore;

/// A bookmark removed by [`prune_missing`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrunedBookmark {
    /// Removed key
    pub key: String,
    /// Directory it resolved to, empty when the line had none
    pub directory: String,
}

/// Delete every bookmark whose directory does not exist
///
/// Keys are snapshotted before the first deletion. Each removal rewrites the
/// store once, and a key repeated in a hand-edited file is removed once. Hand-edited keys that the store itself would reject are
/// reported in the log and left alone.
pub fn prune_missing(store: &BookmarkStore) -> Result<Vec<PrunedBookmark>> {
    let mut keys = store.keys()?;
    keys.dedup();
    let codec = KeyCodec::new(store.config());
    let mut removed = Vec::new();

    for key in keys {
        if let Err(e) = codec.validate(&key) {
            warn!("Skipping bookmark that cannot be managed: {}", e);
            continue;
        }
        let directory = store.resolve(&key, "")?;
        if !directory.is_empty() && Path::new(&directory).is_dir() {
            continue;
        }
        store.delete(&key)?;
        info!("Pruned bookmark '{}' ({})", key, directory);
        removed.push(PrunedBookmark { key, directory });
    }

    Ok(removed)
}

/// Keys whose resolved directory equals `directory`, in listing order
pub fn reverse_lookup(store: &BookmarkStore, directory: &str) -> Result<Vec<String>> {
    let mut matches = Vec::new();
    for key in store.keys()? {
        if store.resolve(&key, "")? == directory {
            matches.push(key);
        }
    }
    Ok(matches)
}
