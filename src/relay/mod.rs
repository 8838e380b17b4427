//! Swap-event relay: classify webhook notifications, extract swap
//! records, publish to the fan-out bus.

pub mod classifier;
pub mod extractor;

pub use classifier::is_relevant;
pub use extractor::SwapEventExtractor;

use std::sync::Arc;

use crate::domain::{ActivityNotification, EventBus, TrackedPoolSet};

/// Orchestrates the classify → extract → publish pipeline.
///
/// A batch is processed sequentially within one invocation; distinct
/// batches may run concurrently. Per-item failures are logged and
/// skipped — one malformed notification never aborts a batch.
#[derive(Debug)]
pub struct EventRelay {
    pools: Arc<TrackedPoolSet>,
    extractor: SwapEventExtractor,
    bus: EventBus,
    channel: String,
    event: String,
}

impl EventRelay {
    /// Creates a relay publishing on the fixed channel/event pair.
    #[must_use]
    pub fn new(
        pools: Arc<TrackedPoolSet>,
        extractor: SwapEventExtractor,
        bus: EventBus,
        channel: &str,
        event: &str,
    ) -> Self {
        Self {
            pools,
            extractor,
            bus,
            channel: channel.to_string(),
            event: event.to_string(),
        }
    }

    /// Relays a batch of notifications, returning the number of swap
    /// records successfully published.
    pub fn relay(&self, batch: &[ActivityNotification]) -> usize {
        let mut published = 0;
        for notification in batch {
            if !is_relevant(notification, &self.pools) {
                continue;
            }
            let Some(record) = self.extractor.extract(notification, &self.pools) else {
                tracing::debug!("relevant notification yielded no swap record");
                continue;
            };
            let payload = match serde_json::to_value(&record) {
                Ok(payload) => payload,
                Err(error) => {
                    tracing::debug!(%error, "swap record serialization failed");
                    continue;
                }
            };
            self.bus.publish(&self.channel, &self.event, payload);
            published += 1;
            tracing::info!(
                wallet = %record.wallet,
                direction = ?record.direction,
                base = %record.base_amount,
                quote = %record.quote_amount,
                "swap record published"
            );
        }
        published
    }
}
