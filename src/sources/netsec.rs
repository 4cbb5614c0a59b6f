//! r/netsec top posts, via the subreddit's Atom feed.

use feed_rs::parser::ParseFeedError;
use tracing::{debug, warn};

use super::{FetchError, Message};

pub async fn fetch(client: &reqwest::Client, feed_url: &str) -> Result<Vec<Message>, FetchError> {
    let resp = client.get(feed_url).send().await?;
    // Rate-limited responses still carry a body; let the parser decide.
    debug!(status = %resp.status(), feed_url, "feed response");

    let bytes = resp.bytes().await?;
    parse_feed(&bytes)
}

pub fn parse_feed(bytes: &[u8]) -> Result<Vec<Message>, FetchError> {
    let feed = feed_rs::parser::parse(bytes).map_err(|e| match e {
        ParseFeedError::IoError(io) => FetchError::Io(io),
        other => FetchError::MalformedFeed(other.to_string()),
    })?;

    let mut messages = Vec::with_capacity(feed.entries.len());
    for entry in feed.entries {
        let Some(link) = entry.links.first() else {
            warn!(entry_id = %entry.id, "feed entry has no link, skipping");
            continue;
        };
        let title = entry.title.as_ref().map(|t| t.content.as_str()).unwrap_or("");
        messages.push(Message {
            text: format!("{} - {}", title, link.href),
            url: link.href.clone(),
        });
    }

    debug!(count = messages.len(), "feed entries parsed");
    Ok(messages)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ATOM: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <id>/r/netsec/top/.rss</id>
  <title>top scoring links : netsec</title>
  <updated>2024-05-01T12:00:00+00:00</updated>
  <entry>
    <id>t3_aaa</id>
    <title>Breaking TLS for fun</title>
    <link href="https://www.reddit.com/r/netsec/comments/aaa/breaking_tls/" />
    <updated>2024-05-01T11:00:00+00:00</updated>
  </entry>
  <entry>
    <id>t3_bbb</id>
    <title>No link here</title>
    <updated>2024-05-01T10:00:00+00:00</updated>
  </entry>
  <entry>
    <id>t3_ccc</id>
    <title>Kernel UAF writeup</title>
    <link href="https://www.reddit.com/r/netsec/comments/ccc/kernel_uaf/" />
    <link href="https://example.com/secondary" />
    <updated>2024-05-01T09:00:00+00:00</updated>
  </entry>
</feed>"#;

    #[test]
    fn entries_use_first_link() {
        let messages = parse_feed(ATOM.as_bytes()).unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(
            messages[0].text,
            "Breaking TLS for fun - https://www.reddit.com/r/netsec/comments/aaa/breaking_tls/"
        );
        assert_eq!(
            messages[0].url,
            "https://www.reddit.com/r/netsec/comments/aaa/breaking_tls/"
        );
        assert_eq!(
            messages[1].url,
            "https://www.reddit.com/r/netsec/comments/ccc/kernel_uaf/"
        );
    }

    #[test]
    fn empty_body_is_malformed() {
        assert!(matches!(parse_feed(b""), Err(FetchError::MalformedFeed(_))));
    }

    #[test]
    fn rate_limit_page_is_malformed() {
        let html = b"<html><body><h1>Too Many Requests</h1></body></html>";
        assert!(matches!(parse_feed(html), Err(FetchError::MalformedFeed(_))));
    }
}
