pub mod types;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

pub use types::{content_hash, HistoryEntry, UrlHash};

/// Persisted record of every URL already pushed to the webhook.
///
/// The whole map is rewritten after each insert. Writes go through a sibling
/// temp file and a rename, so the file on disk is always a complete snapshot.
/// There is no locking: a single writer per state file is assumed, and two
/// processes running against the same file may both deliver the same item.
pub struct HistoryStore {
    path: PathBuf,
    entries: HashMap<UrlHash, HistoryEntry>,
}

impl HistoryStore {
    /// Read the store from `path`.
    ///
    /// A missing or unreadable file counts as a first run: the store starts
    /// empty and is written out before returning.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let entries = match read_entries(&path) {
            Ok(entries) => {
                debug!(path = %path.display(), count = entries.len(), "history loaded");
                entries
            }
            Err(e) => {
                info!(path = %path.display(), reason = %e, "starting with empty history");
                let store = Self {
                    path,
                    entries: HashMap::new(),
                };
                store.persist()?;
                return Ok(store);
            }
        };

        Ok(Self { path, entries })
    }

    pub fn contains(&self, hash: &str) -> bool {
        self.entries.contains_key(hash)
    }

    #[cfg(test)]
    pub fn get(&self, hash: &str) -> Option<&HistoryEntry> {
        self.entries.get(hash)
    }

    /// Insert an entry and flush the full store to disk.
    pub fn record(&mut self, hash: UrlHash, entry: HistoryEntry) -> Result<()> {
        if let Some(previous) = self.entries.insert(hash.clone(), entry) {
            warn!(hash = %hash, url = %previous.url, "overwrote existing history entry");
        }
        self.persist()
    }

    /// Write the whole map via temp file + rename.
    pub fn persist(&self) -> Result<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create {}", dir.display()))?;
        }

        let bytes = serde_json::to_vec(&self.entries).context("serialize history")?;
        let tmp = tmp_path(&self.path);
        std::fs::write(&tmp, &bytes)
            .with_context(|| format!("Failed to write {}", tmp.display()))?;
        std::fs::rename(&tmp, &self.path)
            .with_context(|| format!("Failed to replace {}", self.path.display()))?;

        debug!(path = %self.path.display(), count = self.entries.len(), "history persisted");
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn read_entries(path: &Path) -> Result<HashMap<UrlHash, HistoryEntry>> {
    let bytes = std::fs::read(path)?;
    Ok(serde_json::from_slice(&bytes)?)
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
