//! Broadcast channel used as the fan-out publish primitive.
//!
//! [`EventBus`] wraps a [`tokio::sync::broadcast`] channel. The relay
//! publishes a [`FanoutMessage`] per detected swap, and all WebSocket
//! connections subscribe to receive them.

use tokio::sync::broadcast;

/// One message on the fan-out channel.
#[derive(Debug, Clone, serde::Serialize)]
pub struct FanoutMessage {
    /// Channel name subscribers listen on.
    pub channel: String,
    /// Event name within the channel.
    pub event: String,
    /// Event payload.
    pub payload: serde_json::Value,
}

/// Broadcast bus for [`FanoutMessage`]s.
///
/// Backed by a `tokio::broadcast` channel with a configurable capacity
/// (default 10 000). When the ring buffer is full, the oldest messages
/// are dropped for lagging receivers.
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<FanoutMessage>,
}

impl EventBus {
    /// Creates a new `EventBus` with the given channel capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publishes a message to all subscribers.
    ///
    /// Returns the number of receivers that received the message.
    /// If there are no active receivers, the message is silently dropped.
    pub fn publish(&self, channel: &str, event: &str, payload: serde_json::Value) -> usize {
        self.sender
            .send(FanoutMessage {
                channel: channel.to_string(),
                event: event.to_string(),
                payload,
            })
            .unwrap_or(0)
    }

    /// Creates a new receiver that will receive all future messages.
    ///
    /// Each WebSocket connection should call this once on connect.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<FanoutMessage> {
        self.sender.subscribe()
    }

    /// Returns the current number of active receivers.
    #[must_use]
    pub fn receiver_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn publish_without_receivers_returns_zero() {
        let bus = EventBus::new(100);
        let count = bus.publish("swaps", "swap-detected", serde_json::json!({"n": 1}));
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn subscriber_receives_message() {
        let bus = EventBus::new(100);
        let mut rx = bus.subscribe();

        bus.publish("swaps", "swap-detected", serde_json::json!({"n": 1}));

        let msg = rx.recv().await;
        let Ok(msg) = msg else {
            panic!("expected to receive message");
        };
        assert_eq!(msg.channel, "swaps");
        assert_eq!(msg.event, "swap-detected");
    }

    #[tokio::test]
    async fn multiple_subscribers_receive_same_message() {
        let bus = EventBus::new(100);
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        let count = bus.publish("swaps", "swap-detected", serde_json::json!({"n": 2}));
        assert_eq!(count, 2);

        let m1 = rx1.recv().await;
        let m2 = rx2.recv().await;
        let Ok(m1) = m1 else {
            panic!("rx1 failed");
        };
        let Ok(m2) = m2 else {
            panic!("rx2 failed");
        };
        assert_eq!(m1.payload, m2.payload);
    }

    #[test]
    fn receiver_count_tracks_subscribers() {
        let bus = EventBus::new(100);
        assert_eq!(bus.receiver_count(), 0);

        let _rx1 = bus.subscribe();
        assert_eq!(bus.receiver_count(), 1);

        let _rx2 = bus.subscribe();
        assert_eq!(bus.receiver_count(), 2);

        drop(_rx1);
        assert_eq!(bus.receiver_count(), 1);
    }
}
