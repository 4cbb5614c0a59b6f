use std::sync::Arc;

use tokio::sync::Mutex;

/// Shared by every HTTP-triggered run.
pub struct AppState {
    pub http: reqwest::Client,
    /// Held for a whole run so two requests never race on the history file.
    pub run_lock: Mutex<()>,
}

impl AppState {
    pub fn new(http: reqwest::Client) -> Arc<Self> {
        Arc::new(Self {
            http,
            run_lock: Mutex::new(()),
        })
    }
}
