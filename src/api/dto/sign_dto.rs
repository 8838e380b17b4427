//! Sign-request and verification DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::SignRequest;

/// Query parameters for `GET /api/sign/status`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StatusParams {
    /// Id of the sign request to look up.
    #[serde(rename = "requestId")]
    pub request_id: Option<String>,
}

/// Query parameters for `GET /api/sign/verify`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct VerifyParams {
    /// Hex-encoded signed-message envelope.
    pub signature: Option<String>,
}

/// Response body for `POST /api/sign/login` and `GET /api/sign/status`.
#[derive(Debug, Serialize, ToSchema)]
pub struct SignRequestResponse {
    /// Current sign-request snapshot.
    #[schema(value_type = Object)]
    pub payload: SignRequest,
}

/// Response body for `GET /api/sign/verify`.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VerifyResponse {
    /// Ledger address recovered from the signature.
    pub signer_address: String,
    /// Session token bound to the signer address.
    pub token: String,
}
