use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::config::Config;
use crate::dispatch::{dispatch_all, DispatchReport};
use crate::history::HistoryStore;
use crate::sources::{hacktivity, netsec, FetchError, Message};
use crate::webhook::WebhookClient;

/// One full fetch, dedup and deliver pass, configured from the environment.
pub async fn run_once(client: &reqwest::Client) -> Result<DispatchReport> {
    let config = Config::from_env()?;
    run_with(&config, client).await
}

pub async fn run_with(config: &Config, client: &reqwest::Client) -> Result<DispatchReport> {
    let mut store = HistoryStore::load(&config.history_file)?;
    info!(
        path = %store.path().display(),
        known = store.len(),
        "run started"
    );
    if store.is_empty() {
        info!("history is empty, every fetched item will be delivered");
    }

    let mut messages = hacktivity::fetch(client, config)
        .await
        .context("Failed to fetch hacktivity")?;
    let from_hacktivity = messages.len();

    messages.extend(tolerate_malformed(
        netsec::fetch(client, &config.netsec_feed_url).await,
    )?);

    info!(
        hacktivity = from_hacktivity,
        netsec = messages.len() - from_hacktivity,
        "sources fetched"
    );

    let sink = WebhookClient::new(client.clone(), config.webhook_url.clone());
    let report = dispatch_all(&mut store, &sink, &messages).await?;

    info!(
        delivered = report.delivered,
        skipped = report.skipped,
        "run finished"
    );
    Ok(report)
}

/// A malformed feed yields no messages; every other error is passed on.
fn tolerate_malformed(result: Result<Vec<Message>, FetchError>) -> Result<Vec<Message>> {
    match result {
        Ok(messages) => Ok(messages),
        Err(FetchError::MalformedFeed(reason)) => {
            warn!(reason = %reason, "netsec feed unusable, probably rate limited");
            Ok(Vec::new())
        }
        Err(e) => Err(e).context("Failed to fetch netsec feed"),
    }
}
