use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Content-addressed key for a delivered URL (sha256 hex).
pub type UrlHash = String;

/// Longest text snippet kept per entry; the full message is not needed.
pub const SNIPPET_CHARS: usize = 64;

/// What was delivered for a given URL, and when.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub text: String,
    pub url: String,
    /// UNIX seconds with sub-second precision.
    pub timestamp: f64,
}

impl HistoryEntry {
    /// Build an entry stamped with the current wall-clock time.
    pub fn now(text: &str, url: &str) -> Self {
        let now = chrono::Utc::now();
        Self {
            text: text.chars().take(SNIPPET_CHARS).collect(),
            url: url.to_string(),
            timestamp: now.timestamp_millis() as f64 / 1000.0,
        }
    }
}

pub fn content_hash(url: &str) -> UrlHash {
    let mut hasher = Sha256::new();
    hasher.update(url.as_bytes());
    hex::encode(hasher.finalize())
}
