//! HackerOne hacktivity feed: publicly disclosed reports.

use serde::Deserialize;
use tracing::debug;

use super::{FetchError, Message};
use crate::config::Config;

#[derive(Debug, Deserialize)]
struct HacktivityPage {
    data: Vec<HacktivityItem>,
}

#[derive(Debug, Deserialize)]
struct HacktivityItem {
    attributes: ItemAttributes,
    relationships: Relationships,
}

#[derive(Debug, Deserialize)]
struct ItemAttributes {
    title: String,
    url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Relationships {
    program: Related<ProgramAttributes>,
    reporter: Related<ReporterAttributes>,
}

#[derive(Debug, Deserialize)]
struct Related<T> {
    data: RelatedData<T>,
}

#[derive(Debug, Deserialize)]
struct RelatedData<T> {
    attributes: T,
}

#[derive(Debug, Deserialize)]
struct ProgramAttributes {
    name: String,
}

#[derive(Debug, Deserialize)]
struct ReporterAttributes {
    username: String,
}

pub async fn fetch(client: &reqwest::Client, config: &Config) -> Result<Vec<Message>, FetchError> {
    let resp = client
        .get(&config.hacktivity_url)
        .basic_auth(&config.hackerone_username, Some(&config.hackerone_api_key))
        .header("Accept", "application/json")
        .send()
        .await?
        .error_for_status()?;

    let body = resp.bytes().await?;
    let messages = parse_hacktivity(&body)?;
    debug!(count = messages.len(), "hacktivity items parsed");
    Ok(messages)
}

/// Turn a hacktivity response body into messages. Items without a URL are dropped.
pub fn parse_hacktivity(body: &[u8]) -> Result<Vec<Message>, FetchError> {
    let page: HacktivityPage = serde_json::from_slice(body)?;

    Ok(page
        .data
        .into_iter()
        .filter_map(|item| {
            let url = item.attributes.url?;
            let text = format!(
                "{}\n{} disclosed a bug submitted by {}: {}",
                item.attributes.title,
                item.relationships.program.data.attributes.name,
                item.relationships.reporter.data.attributes.username,
                url
            );
            Some(Message { text, url })
        })
        .collect())
}
