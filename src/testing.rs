//! Helpers for tests that talk to a real HTTP server.

use std::path::PathBuf;

use axum::Router;

use crate::config::Config;

/// Serve `app` on an ephemeral localhost port and return its base URL.
pub async fn spawn(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Config pointing every endpoint at a local server.
pub fn local_config(base: &str, history_file: PathBuf) -> Config {
    Config {
        hackerone_username: "u".to_string(),
        hackerone_api_key: "k".to_string(),
        webhook_url: format!("{}/hook", base),
        hacktivity_url: format!("{}/hacktivity", base),
        netsec_feed_url: format!("{}/rss", base),
        history_file,
    }
}
