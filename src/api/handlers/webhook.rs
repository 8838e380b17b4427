//! Activity webhook handler.
//!
//! The activity source may not retry on non-2xx, and a missed batch is
//! worse than a partially processed one — so this endpoint answers 200
//! for every POST it can read, no matter how malformed the content.
//! Body and items are parsed leniently; failures are logged and
//! dropped, never surfaced to the caller.

use axum::body::Bytes;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};

use crate::api::dto::WebhookAck;
use crate::app_state::AppState;
use crate::domain::ActivityNotification;

/// `POST /api/webhook/activity` — Relay a batch of activity
/// notifications. Non-POST methods receive 405 from the router.
#[utoipa::path(
    post,
    path = "/api/webhook/activity",
    tag = "Webhook",
    summary = "Relay a ledger-activity batch",
    description = "Classifies and extracts swap activity from the batch and publishes records to the fan-out channel. Always answers 200; content problems are logged, not returned.",
    request_body = serde_json::Value,
    responses(
        (status = 200, description = "Batch processed", body = WebhookAck),
    )
)]
pub async fn activity_webhook(State(state): State<AppState>, body: Bytes) -> impl IntoResponse {
    let batch = parse_batch(&body);
    let published = state.relay.relay(&batch);
    tracing::debug!(items = batch.len(), published, "webhook batch relayed");

    Json(WebhookAck {
        message: "ok".to_string(),
        published,
    })
}

/// Parses the raw body into notifications, dropping whatever does not
/// fit: a non-array body yields an empty batch, an unreadable item is
/// skipped.
fn parse_batch(body: &[u8]) -> Vec<ActivityNotification> {
    let items: Vec<serde_json::Value> = match serde_json::from_slice(body) {
        Ok(items) => items,
        Err(error) => {
            tracing::warn!(%error, "webhook body is not a notification array");
            return Vec::new();
        }
    };

    items
        .into_iter()
        .filter_map(|item| match serde_json::from_value(item) {
            Ok(notification) => Some(notification),
            Err(error) => {
                tracing::debug!(%error, "skipping unreadable notification");
                None
            }
        })
        .collect()
}

/// Webhook routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/webhook/activity", post(activity_webhook))
}
