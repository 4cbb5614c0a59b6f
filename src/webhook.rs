use async_trait::async_trait;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("{0}")]
    Request(#[from] reqwest::Error),

    /// Non-2xx reply; carries the response body.
    #[error("HTTP {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// Somewhere a message text can be posted.
#[async_trait]
pub trait Sink: Send + Sync {
    async fn deliver(&self, text: &str) -> Result<(), DeliveryError>;
}

/// Discord-compatible incoming webhook.
pub struct WebhookClient {
    client: reqwest::Client,
    url: String,
}

impl WebhookClient {
    pub fn new(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl Sink for WebhookClient {
    async fn deliver(&self, text: &str) -> Result<(), DeliveryError> {
        let resp = self
            .client
            .post(&self.url)
            .header("Accept", "application/json")
            .json(&json!({ "content": text }))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_else(|e| e.to_string());
            return Err(DeliveryError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}
