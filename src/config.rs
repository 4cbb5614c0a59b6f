use std::path::PathBuf;

use anyhow::{Context, Result};

pub const DEFAULT_HACKTIVITY_URL: &str = "https://api.hackerone.com/v1/hackers/hacktivity";
pub const DEFAULT_NETSEC_FEED_URL: &str = "https://www.reddit.com/r/netsec/top/.rss";
pub const DEFAULT_HISTORY_FILE: &str = "message_history.json";

/// Everything a single run needs, read from the environment (and `.env`).
#[derive(Debug, Clone)]
pub struct Config {
    pub hackerone_username: String,
    pub hackerone_api_key: String,
    pub webhook_url: String,
    pub hacktivity_url: String,
    pub netsec_feed_url: String,
    pub history_file: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            hackerone_username: required("HACKERONE_API_USERNAME")?,
            hackerone_api_key: required("HACKERONE_API_KEY")?,
            webhook_url: required("DISCORD_WEBHOOK_URL")?,
            hacktivity_url: dotenv::var("HACKTIVITY_URL")
                .unwrap_or_else(|_| DEFAULT_HACKTIVITY_URL.to_string()),
            netsec_feed_url: dotenv::var("NETSEC_FEED_URL")
                .unwrap_or_else(|_| DEFAULT_NETSEC_FEED_URL.to_string()),
            history_file: dotenv::var("MESSAGE_HISTORY_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_HISTORY_FILE)),
        })
    }
}

fn required(key: &str) -> Result<String> {
    dotenv::var(key).with_context(|| format!("{} required", key))
}
