//! Webhook acknowledgment DTO.

use serde::Serialize;
use utoipa::ToSchema;

/// Response body for `POST /api/webhook/activity`.
///
/// Always returned with status 200: the activity source may not retry
/// on non-2xx, and a missed batch is worse than a partially processed
/// one.
#[derive(Debug, Serialize, ToSchema)]
pub struct WebhookAck {
    /// Fixed acknowledgment message.
    pub message: String,
    /// Number of swap records published from this batch.
    pub published: usize,
}
