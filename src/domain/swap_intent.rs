//! Validated swap-intent value object.

use crate::error::GatewayError;

/// A validated request to swap one asset for another.
///
/// Constructed once from request input, consumed once to build a
/// transaction payload; never persisted.
#[derive(Debug, Clone)]
pub struct SwapIntent {
    /// Asset the user is paying with.
    pub source_asset: String,
    /// Asset the user wants to receive.
    pub dest_asset: String,
    /// Decimal amount of the source asset, as entered by the user.
    pub amount: String,
    /// Ledger address of the counterparty (destination and, for issued
    /// assets, the issuing account).
    pub counterparty_address: String,
    /// Push-notification token of the user's device, when known.
    pub device_token: Option<String>,
}

impl SwapIntent {
    /// Validates the raw fields and builds a `SwapIntent`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::InvalidIntent`] if any required field is
    /// absent or empty.
    pub fn new(
        amount: Option<String>,
        source_asset: Option<String>,
        dest_asset: Option<String>,
        counterparty_address: Option<String>,
        device_token: Option<String>,
    ) -> Result<Self, GatewayError> {
        let amount = required("amount", amount)?;
        let source_asset = required("sourceAsset", source_asset)?;
        let dest_asset = required("destAsset", dest_asset)?;
        let counterparty_address = required("counterpartyAddress", counterparty_address)?;

        Ok(Self {
            source_asset,
            dest_asset,
            amount,
            counterparty_address,
            device_token: device_token.filter(|t| !t.trim().is_empty()),
        })
    }
}

/// Rejects absent or blank fields.
fn required(name: &str, value: Option<String>) -> Result<String, GatewayError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(GatewayError::InvalidIntent(name.to_string())),
    }
}
