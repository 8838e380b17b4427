//! Sign-request broker.
//!
//! Creation and retrieval are deliberately separate calls: the signing
//! service resolves requests asynchronously on the user's device, so
//! the broker never blocks waiting for a resolution — polling is the
//! caller's responsibility. The broker holds no state of its own; every
//! request lives in the external service, addressable by id.

use std::sync::Arc;

use crate::domain::{Network, SignIntent, SignRequest, SwapIntent};
use crate::error::GatewayError;
use crate::ledger::LedgerConnection;
use crate::signing::SigningService;

/// Creates and retrieves remote sign requests.
#[derive(Debug)]
pub struct SignRequestBroker {
    service: Arc<dyn SigningService>,
    ledger: Arc<LedgerConnection>,
    network: Network,
    swap_expire_mins: u32,
}

impl SignRequestBroker {
    /// Creates a broker over the signing-service seam.
    #[must_use]
    pub fn new(
        service: Arc<dyn SigningService>,
        ledger: Arc<LedgerConnection>,
        network: Network,
        swap_expire_mins: u32,
    ) -> Self {
        Self {
            service,
            ledger,
            network,
            swap_expire_mins,
        }
    }

    /// Creates a login sign request (a SignIn challenge).
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::ServiceUnavailable`] when the signing
    /// service is unreachable.
    pub async fn create_login_request(&self) -> Result<SignRequest, GatewayError> {
        let body = serde_json::json!({
            "txjson": { "TransactionType": "SignIn" },
        });
        self.service.create_payload(SignIntent::Login, body).await
    }

    /// Creates a swap sign request from a validated intent.
    ///
    /// Builds a Payment payload. A native source asset is converted to
    /// the chain's indivisible base unit; an issued asset is wrapped
    /// with its issuing account. The payload never auto-submits (the
    /// signer must approve on device), carries a finite expiry window,
    /// and requests push delivery — forced when a device token is
    /// supplied.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::InvalidIntent`] for unconvertible
    /// amounts and [`GatewayError::ServiceUnavailable`] when the
    /// signing service is unreachable.
    pub async fn create_swap_request(
        &self,
        intent: &SwapIntent,
    ) -> Result<SignRequest, GatewayError> {
        self.ledger.ensure_connected();

        let amount = if intent.source_asset == self.network.native_asset() {
            serde_json::Value::String(self.ledger.xrp_to_drops(&intent.amount)?.to_string())
        } else {
            serde_json::json!({
                "currency": intent.source_asset,
                "value": intent.amount,
                "issuer": intent.counterparty_address,
            })
        };

        let body = serde_json::json!({
            "user_token": intent.device_token,
            "txjson": {
                "TransactionType": "Payment",
                "Destination": intent.counterparty_address,
                "Amount": amount,
            },
            "options": {
                "submit": false,
                "expire": self.swap_expire_mins,
                "force_push_notification": intent.device_token.is_some(),
            },
        });

        tracing::info!(
            source = %intent.source_asset,
            dest = %intent.dest_asset,
            "creating swap sign request"
        );
        self.service
            .create_payload(SignIntent::SwapPayment, body)
            .await
    }

    /// Fetches the current snapshot of a sign request.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::MissingParameter`] for an empty id,
    /// [`GatewayError::RequestNotFound`] for unknown ids, and
    /// [`GatewayError::ServiceUnavailable`] when the service is
    /// unreachable.
    pub async fn get_request(&self, id: &str) -> Result<SignRequest, GatewayError> {
        if id.trim().is_empty() {
            return Err(GatewayError::MissingParameter("requestId".to_string()));
        }
        self.service.get_payload(id).await
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use std::time::Duration;

    use async_trait::async_trait;

    use super::*;
    use crate::domain::SignRequestStatus;

    /// Fake signing service that echoes the request body as the payload.
    #[derive(Debug)]
    struct EchoService;

    #[async_trait]
    impl SigningService for EchoService {
        async fn create_payload(
            &self,
            intent: SignIntent,
            body: serde_json::Value,
        ) -> Result<SignRequest, GatewayError> {
            Ok(SignRequest {
                id: "req-1".to_string(),
                intent,
                status: SignRequestStatus::Pending,
                payload: body,
            })
        }

        async fn get_payload(&self, id: &str) -> Result<SignRequest, GatewayError> {
            if id == "req-1" {
                Ok(SignRequest {
                    id: id.to_string(),
                    intent: SignIntent::Login,
                    status: SignRequestStatus::Pending,
                    payload: serde_json::json!({"uuid": id}),
                })
            } else {
                Err(GatewayError::RequestNotFound(id.to_string()))
            }
        }
    }

    fn broker() -> SignRequestBroker {
        let Ok(ledger) = LedgerConnection::spawn(
            "http://127.0.0.1:1".to_string(),
            Duration::from_secs(60),
            Duration::from_millis(50),
        ) else {
            panic!("expected ledger handle");
        };
        SignRequestBroker::new(Arc::new(EchoService), Arc::new(ledger), Network::Main, 5)
    }

    fn intent(source: &str, device_token: Option<&str>) -> SwapIntent {
        let Ok(intent) = SwapIntent::new(
            Some("10".to_string()),
            Some(source.to_string()),
            Some("USD".to_string()),
            Some("rIssuer123".to_string()),
            device_token.map(str::to_string),
        ) else {
            panic!("expected valid intent");
        };
        intent
    }

    #[tokio::test]
    async fn login_request_is_pending_with_id() {
        let broker = broker();
        let Ok(request) = broker.create_login_request().await else {
            panic!("expected sign request");
        };
        assert!(!request.id.is_empty());
        assert_eq!(request.status, SignRequestStatus::Pending);
        assert_eq!(request.intent, SignIntent::Login);
        assert_eq!(
            request.payload.pointer("/txjson/TransactionType"),
            Some(&serde_json::json!("SignIn"))
        );
    }

    #[tokio::test]
    async fn native_swap_amount_is_converted_to_drops() {
        let broker = broker();
        let Ok(request) = broker.create_swap_request(&intent("XRP", Some("tok"))).await else {
            panic!("expected sign request");
        };
        assert_eq!(
            request.payload.pointer("/txjson/Amount"),
            Some(&serde_json::json!("10000000"))
        );
        assert_eq!(
            request.payload.pointer("/options/force_push_notification"),
            Some(&serde_json::json!(true))
        );
        assert_eq!(
            request.payload.pointer("/options/submit"),
            Some(&serde_json::json!(false))
        );
    }

    #[tokio::test]
    async fn issued_asset_amount_is_wrapped_with_issuer() {
        let broker = broker();
        let Ok(request) = broker.create_swap_request(&intent("USD", None)).await else {
            panic!("expected sign request");
        };
        assert_eq!(
            request.payload.pointer("/txjson/Amount/issuer"),
            Some(&serde_json::json!("rIssuer123"))
        );
        assert_eq!(
            request.payload.pointer("/txjson/Amount/value"),
            Some(&serde_json::json!("10"))
        );
        assert_eq!(
            request.payload.pointer("/options/force_push_notification"),
            Some(&serde_json::json!(false))
        );
    }

    #[tokio::test]
    async fn swap_request_carries_finite_expiry() {
        let broker = broker();
        let Ok(request) = broker.create_swap_request(&intent("XRP", None)).await else {
            panic!("expected sign request");
        };
        assert_eq!(
            request.payload.pointer("/options/expire"),
            Some(&serde_json::json!(5))
        );
    }

    #[tokio::test]
    async fn get_request_is_idempotent_without_external_change() {
        let broker = broker();
        let Ok(first) = broker.get_request("req-1").await else {
            panic!("expected snapshot");
        };
        let Ok(second) = broker.get_request("req-1").await else {
            panic!("expected snapshot");
        };
        assert_eq!(first.id, second.id);
        assert_eq!(first.status, second.status);
        assert_eq!(first.payload, second.payload);
    }

    #[tokio::test]
    async fn empty_id_is_an_input_error() {
        let broker = broker();
        let result = broker.get_request("  ").await;
        assert!(matches!(result, Err(GatewayError::MissingParameter(_))));
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let broker = broker();
        let result = broker.get_request("nope").await;
        assert!(matches!(result, Err(GatewayError::RequestNotFound(_))));
    }
}
