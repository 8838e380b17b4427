//! Normalized swap record published to the fan-out channel.

use serde::{Deserialize, Serialize};

/// Direction of a detected swap, from the pool's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwapDirection {
    /// Trader bought the base asset.
    Buy,
    /// Trader sold the base asset.
    Sell,
}

impl SwapDirection {
    /// Derives the direction from the base-asset transfer amount.
    ///
    /// Polarity is taken from the upstream activity source as-is: a
    /// positive base amount denotes a Sell. Flagged with the domain
    /// owner; do not invert here without a confirmed correction.
    #[must_use]
    pub fn from_base_amount(base_amount: &str) -> Self {
        let amount: f64 = base_amount.parse().unwrap_or(0.0);
        if amount > 0.0 { Self::Sell } else { Self::Buy }
    }
}

/// Economically meaningful fields of one detected swap.
///
/// Derived, ephemeral, published exactly once per qualifying
/// notification. Amounts stay string-encoded to preserve the source
/// representation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapRecord {
    /// Unix timestamp of the originating transaction, seconds.
    pub timestamp: i64,
    /// Wallet that initiated the swap, or `"unknown"`.
    pub wallet: String,
    /// Swap direction.
    pub direction: SwapDirection,
    /// Base-asset amount (wrapped-native token transfer).
    pub base_amount: String,
    /// Quote-asset amount parsed from the activity description.
    pub quote_amount: String,
}
