use anyhow::{anyhow, Result};
use tracing::{debug, warn};

use crate::history::{content_hash, HistoryEntry, HistoryStore};
use crate::sources::Message;
use crate::webhook::{DeliveryError, Sink};

/// Outcome of offering one message to the sink.
#[derive(Debug)]
pub enum Delivery {
    Delivered,
    /// Already in history; nothing was sent.
    Duplicate,
    Failed(DeliveryError),
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DispatchReport {
    pub delivered: usize,
    pub skipped: usize,
}

/// Deliver a single message unless its URL was seen before.
///
/// The store is only touched after the sink accepts the message. A persist
/// failure after a successful post is returned as an error; the post cannot
/// be undone, so that item will be sent again on the next run.
pub async fn dispatch_one(
    store: &mut HistoryStore,
    sink: &dyn Sink,
    message: &Message,
) -> Result<Delivery> {
    let hash = content_hash(&message.url);
    if store.contains(&hash) {
        debug!(url = %message.url, "already delivered");
        return Ok(Delivery::Duplicate);
    }

    if let Err(e) = sink.deliver(&message.text).await {
        return Ok(Delivery::Failed(e));
    }

    store.record(hash, HistoryEntry::now(&message.text, &message.url))?;
    debug!(url = %message.url, "delivered");
    Ok(Delivery::Delivered)
}

/// Deliver messages in order, stopping at the first failed delivery.
pub async fn dispatch_all(
    store: &mut HistoryStore,
    sink: &dyn Sink,
    messages: &[Message],
) -> Result<DispatchReport> {
    let mut report = DispatchReport::default();

    for message in messages {
        match dispatch_one(store, sink, message).await? {
            Delivery::Delivered => report.delivered += 1,
            Delivery::Duplicate => report.skipped += 1,
            Delivery::Failed(e) => {
                warn!(
                    url = %message.url,
                    delivered = report.delivered,
                    "delivery failed, aborting run"
                );
                return Err(anyhow!("Failed to send message: {}", e));
            }
        }
    }

    Ok(report)
}
