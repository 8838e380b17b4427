//! WebSocket connection loop.
//!
//! Forwards fan-out messages to a single subscribed listener until the
//! client disconnects or the bus closes.

use axum::extract::ws::{Message, WebSocket};
use futures_util::{SinkExt, StreamExt};
use tokio::sync::broadcast;

use super::messages::WsEnvelope;
use crate::domain::FanoutMessage;

/// Runs the forward loop for a single WebSocket connection.
pub async fn run_connection(socket: WebSocket, mut event_rx: broadcast::Receiver<FanoutMessage>) {
    let (mut ws_tx, mut ws_rx) = socket.split();

    loop {
        tokio::select! {
            // Incoming frames: only close is meaningful on this surface.
            msg = ws_rx.next() => {
                match msg {
                    Some(Ok(Message::Close(_))) | None => break,
                    _ => {}
                }
            }
            // Fan-out message from the bus.
            event = event_rx.recv() => {
                match event {
                    Ok(message) => {
                        let envelope = WsEnvelope::wrap(message);
                        let json = serde_json::to_string(&envelope).unwrap_or_default();
                        if ws_tx.send(Message::text(json)).await.is_err() {
                            break;
                        }
                    }
                    Err(broadcast::error::RecvError::Lagged(n)) => {
                        tracing::warn!(lagged = n, "ws listener lagged behind fan-out bus");
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
        }
    }

    tracing::debug!("ws connection closed");
}
