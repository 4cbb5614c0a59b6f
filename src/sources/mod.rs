pub mod hacktivity;
pub mod netsec;

use std::time::Duration;

use anyhow::{Context, Result};
use thiserror::Error;

const USER_AGENT: &str = concat!("hacktivity-relay/", env!("CARGO_PKG_VERSION"));

/// One item ready to be relayed. `url` is the dedup key.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub text: String,
    pub url: String,
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("I/O error while reading feed: {0}")]
    Io(#[from] std::io::Error),

    /// Body was not a usable feed. Reddit serves this when rate limiting,
    /// so callers may treat it as an empty result.
    #[error("Malformed feed: {0}")]
    MalformedFeed(String),
}

/// Shared HTTP client for all outbound calls.
pub fn http_client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(30))
        .build()
        .context("Failed to create HTTP client")
}
