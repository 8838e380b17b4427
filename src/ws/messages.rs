//! WebSocket message envelope.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::FanoutMessage;

/// Server → client envelope wrapping one fan-out message.
#[derive(Debug, Clone, Serialize)]
pub struct WsEnvelope {
    /// Server-generated message id.
    pub id: String,
    /// Fan-out channel the message was published on.
    pub channel: String,
    /// Event name within the channel.
    pub event: String,
    /// Delivery timestamp.
    pub timestamp: DateTime<Utc>,
    /// Published payload.
    pub payload: serde_json::Value,
}

impl WsEnvelope {
    /// Wraps a fan-out message for delivery.
    #[must_use]
    pub fn wrap(message: FanoutMessage) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            channel: message.channel,
            event: message.event,
            timestamp: Utc::now(),
            payload: message.payload,
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn wrap_preserves_channel_event_and_payload() {
        let envelope = WsEnvelope::wrap(FanoutMessage {
            channel: "swaps".to_string(),
            event: "swap-detected".to_string(),
            payload: serde_json::json!({"wallet": "rABC"}),
        });
        assert_eq!(envelope.channel, "swaps");
        assert_eq!(envelope.event, "swap-detected");
        assert!(!envelope.id.is_empty());
        assert_eq!(
            envelope.payload.get("wallet").and_then(|v| v.as_str()),
            Some("rABC")
        );
    }
}
