//! Client for the external wallet-signing service.
//!
//! The service is an opaque request/response collaborator: the gateway
//! creates payloads and fetches their resolution snapshots, nothing
//! more. [`SigningService`] is the seam; [`HttpSigningService`] is the
//! production implementation speaking the service's REST surface
//! (`POST /payload`, `GET /payload/{id}`, key/secret headers).

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::{SignIntent, SignRequest, SignRequestStatus};
use crate::error::GatewayError;

/// Asynchronous seam to the wallet-signing service.
///
/// Implementations must be substitutable with a fake in tests.
#[async_trait]
pub trait SigningService: Send + Sync + std::fmt::Debug {
    /// Creates a new sign request from a service-specific body.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::ServiceUnavailable`] if the service is
    /// unreachable or rejects the request.
    async fn create_payload(
        &self,
        intent: SignIntent,
        body: serde_json::Value,
    ) -> Result<SignRequest, GatewayError>;

    /// Fetches the current resolution snapshot of a sign request.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::RequestNotFound`] for ids unknown to the
    /// service and [`GatewayError::ServiceUnavailable`] when it is
    /// unreachable.
    async fn get_payload(&self, id: &str) -> Result<SignRequest, GatewayError>;
}

/// Wire shape of a payload-creation response.
#[derive(Debug, Deserialize)]
struct CreateResponse {
    uuid: String,
}

/// Wire shape of a payload snapshot's resolution metadata.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SnapshotMeta {
    signed: bool,
    cancelled: bool,
    expired: bool,
}

/// Wire shape of a payload snapshot response.
#[derive(Debug, Deserialize)]
struct SnapshotResponse {
    #[serde(default)]
    meta: SnapshotMeta,
    #[serde(default)]
    payload: serde_json::Value,
}

impl SnapshotMeta {
    /// Resolution precedence: signed wins over cancelled/expired, a
    /// cancel beats a concurrent expiry.
    fn status(&self) -> SignRequestStatus {
        if self.signed {
            SignRequestStatus::Resolved
        } else if self.cancelled {
            SignRequestStatus::Rejected
        } else if self.expired {
            SignRequestStatus::Expired
        } else {
            SignRequestStatus::Pending
        }
    }
}

/// HTTP implementation of [`SigningService`].
#[derive(Debug, Clone)]
pub struct HttpSigningService {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    api_secret: String,
}

impl HttpSigningService {
    /// Builds a client with an explicit timeout on every request.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Internal`] if the HTTP client cannot be
    /// constructed.
    pub fn new(
        base_url: &str,
        api_key: &str,
        api_secret: &str,
        timeout: Duration,
    ) -> Result<Self, GatewayError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GatewayError::Internal(format!("signing http client: {e}")))?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            api_secret: api_secret.to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

#[async_trait]
impl SigningService for HttpSigningService {
    async fn create_payload(
        &self,
        intent: SignIntent,
        body: serde_json::Value,
    ) -> Result<SignRequest, GatewayError> {
        let response = self
            .http
            .post(self.url("/payload"))
            .header("X-API-Key", &self.api_key)
            .header("X-API-Secret", &self.api_secret)
            .json(&body)
            .send()
            .await
            .map_err(|e| GatewayError::ServiceUnavailable(format!("signing service: {e}")))?;

        if !response.status().is_success() {
            return Err(GatewayError::ServiceUnavailable(format!(
                "signing service returned {}",
                response.status()
            )));
        }

        let raw: serde_json::Value = response
            .json()
            .await
            .map_err(|e| GatewayError::ServiceUnavailable(format!("signing service: {e}")))?;
        let created: CreateResponse = serde_json::from_value(raw.clone())
            .map_err(|e| GatewayError::ServiceUnavailable(format!("malformed response: {e}")))?;

        tracing::debug!(id = %created.uuid, ?intent, "sign request created");
        Ok(SignRequest {
            id: created.uuid,
            intent,
            status: SignRequestStatus::Pending,
            payload: raw,
        })
    }

    async fn get_payload(&self, id: &str) -> Result<SignRequest, GatewayError> {
        let response = self
            .http
            .get(self.url(&format!("/payload/{id}")))
            .header("X-API-Key", &self.api_key)
            .header("X-API-Secret", &self.api_secret)
            .send()
            .await
            .map_err(|e| GatewayError::ServiceUnavailable(format!("signing service: {e}")))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(GatewayError::RequestNotFound(id.to_string()));
        }
        if !response.status().is_success() {
            return Err(GatewayError::ServiceUnavailable(format!(
                "signing service returned {}",
                response.status()
            )));
        }

        let raw: serde_json::Value = response
            .json()
            .await
            .map_err(|e| GatewayError::ServiceUnavailable(format!("signing service: {e}")))?;
        let snapshot: SnapshotResponse = serde_json::from_value(raw.clone())
            .map_err(|e| GatewayError::ServiceUnavailable(format!("malformed response: {e}")))?;

        Ok(SignRequest {
            id: id.to_string(),
            intent: intent_of(&snapshot.payload),
            status: snapshot.meta.status(),
            payload: raw,
        })
    }
}

/// Infers the original intent from the snapshot's transaction json.
fn intent_of(payload: &serde_json::Value) -> SignIntent {
    let tx_type = payload
        .pointer("/txjson/TransactionType")
        .and_then(|v| v.as_str())
        .unwrap_or_default();
    if tx_type == "SignIn" {
        SignIntent::Login
    } else {
        SignIntent::SwapPayment
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn signed_snapshot_resolves() {
        let meta = SnapshotMeta {
            signed: true,
            cancelled: false,
            expired: false,
        };
        assert_eq!(meta.status(), SignRequestStatus::Resolved);
    }

    #[test]
    fn cancelled_beats_expired() {
        let meta = SnapshotMeta {
            signed: false,
            cancelled: true,
            expired: true,
        };
        assert_eq!(meta.status(), SignRequestStatus::Rejected);
    }

    #[test]
    fn untouched_snapshot_is_pending() {
        assert_eq!(SnapshotMeta::default().status(), SignRequestStatus::Pending);
    }

    #[test]
    fn intent_inferred_from_transaction_type() {
        let login = serde_json::json!({"txjson": {"TransactionType": "SignIn"}});
        let swap = serde_json::json!({"txjson": {"TransactionType": "Payment"}});
        assert_eq!(intent_of(&login), SignIntent::Login);
        assert_eq!(intent_of(&swap), SignIntent::SwapPayment);
        assert_eq!(intent_of(&serde_json::json!({})), SignIntent::SwapPayment);
    }
}
