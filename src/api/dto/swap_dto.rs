//! Swap endpoint DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::SignRequest;

/// Request body for `POST /api/swap`.
///
/// Every field is optional at the wire level so that absence surfaces
/// as a 400 input error instead of a deserialization rejection; the
/// domain validation lives in [`crate::domain::SwapIntent::new`].
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct SwapRequestDto {
    /// Decimal amount of the source asset.
    pub amount: Option<String>,
    /// Asset the user pays with.
    pub source_asset: Option<String>,
    /// Asset the user wants to receive.
    pub dest_asset: Option<String>,
    /// Counterparty ledger address.
    pub counterparty_address: Option<String>,
    /// Push token of the user's device.
    pub device_token: Option<String>,
}

/// Response body for `POST /api/swap`.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SwapResponseDto {
    /// Human-readable confirmation.
    pub message: String,
    /// Created sign request awaiting device approval.
    #[schema(value_type = Object)]
    pub sign_request: SignRequest,
}
