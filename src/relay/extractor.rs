//! Swap-record extraction from classified notifications.

use crate::domain::{
    ActivityNotification, SwapDirection, SwapRecord, TrackedPoolSet, tracked_entry,
};

/// Wallet sentinel when no native transfer names a sender.
const UNKNOWN_WALLET: &str = "unknown";

/// Derives normalized [`SwapRecord`]s from relevant notifications.
#[derive(Debug, Clone)]
pub struct SwapEventExtractor {
    wrapped_native_mint: String,
}

impl SwapEventExtractor {
    /// Creates an extractor matching base-asset transfers against the
    /// given wrapped-native mint identifier.
    #[must_use]
    pub fn new(wrapped_native_mint: &str) -> Self {
        Self {
            wrapped_native_mint: wrapped_native_mint.to_string(),
        }
    }

    /// Extracts a swap record, or `None` when the notification cannot
    /// yield one.
    ///
    /// Total over arbitrary input: missing pieces degrade field by
    /// field (`"unknown"` wallet, zero amounts) and only a notification
    /// without a tracked-pool entry returns `None`. A bad notification
    /// must never abort the batch it arrived in.
    #[must_use]
    pub fn extract(
        &self,
        notification: &ActivityNotification,
        pools: &TrackedPoolSet,
    ) -> Option<SwapRecord> {
        // Same membership test the classifier ran; classification and
        // extraction must agree on it.
        tracked_entry(notification, pools)?;

        let wallet = notification
            .native_transfers
            .first()
            .map(|t| t.from_user_account.as_str())
            .filter(|w| !w.is_empty())
            .unwrap_or(UNKNOWN_WALLET)
            .to_string();

        let base_amount = notification
            .token_transfers
            .iter()
            .find(|t| t.mint == self.wrapped_native_mint)
            .map_or_else(|| "0".to_string(), |t| t.token_amount.clone());

        let direction = SwapDirection::from_base_amount(&base_amount);
        let quote_amount = quote_amount_from_description(&notification.description);

        Some(SwapRecord {
            timestamp: notification.timestamp,
            wallet,
            direction,
            base_amount,
            quote_amount,
        })
    }
}

/// Parses the quote amount from the activity source's free-text
/// description by fixed word position: index 2 names the quote asset
/// symbol and index 1 carries its amount ("Swapped 12 USDC for …").
///
/// Fragile by construction and flagged as such; replace with a
/// structured field if the activity source ever offers one.
fn quote_amount_from_description(description: &str) -> String {
    let mut words = description.split_whitespace();
    let amount = words.nth(1);
    let symbol = words.next();
    match (amount, symbol) {
        (Some(amount), Some(_)) if amount.parse::<f64>().is_ok() => amount.to_string(),
        _ => "0".to_string(),
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::{AccountData, NativeTransfer, TokenTransfer};

    const MINT: &str = "So11111111111111111111111111111111111111112";

    fn pools() -> TrackedPoolSet {
        TrackedPoolSet::new(["pool1"])
    }

    fn tracked() -> ActivityNotification {
        ActivityNotification {
            timestamp: 1_700_000_000,
            account_data: vec![AccountData {
                account: "pool1".to_string(),
                ..AccountData::default()
            }],
            native_transfers: vec![NativeTransfer {
                from_user_account: "rABC".to_string(),
                ..NativeTransfer::default()
            }],
            token_transfers: vec![TokenTransfer {
                mint: MINT.to_string(),
                token_amount: "5".to_string(),
                ..TokenTransfer::default()
            }],
            description: "Swapped 12 USDC for 5 SOL".to_string(),
        }
    }

    #[test]
    fn extracts_full_record() {
        let extractor = SwapEventExtractor::new(MINT);
        let Some(record) = extractor.extract(&tracked(), &pools()) else {
            panic!("expected a record");
        };
        assert_eq!(record.wallet, "rABC");
        assert_eq!(record.direction, SwapDirection::Sell);
        assert_eq!(record.base_amount, "5");
        assert_eq!(record.quote_amount, "12");
    }

    #[test]
    fn untracked_notification_yields_none() {
        let extractor = SwapEventExtractor::new(MINT);
        assert!(
            extractor
                .extract(&ActivityNotification::default(), &pools())
                .is_none()
        );
    }

    #[test]
    fn missing_native_transfer_uses_unknown_wallet() {
        let extractor = SwapEventExtractor::new(MINT);
        let mut notification = tracked();
        notification.native_transfers.clear();
        let Some(record) = extractor.extract(&notification, &pools()) else {
            panic!("expected a record");
        };
        assert_eq!(record.wallet, "unknown");
    }

    #[test]
    fn unmatched_mint_defaults_base_to_zero_and_buy() {
        let extractor = SwapEventExtractor::new(MINT);
        let mut notification = tracked();
        notification.token_transfers = vec![TokenTransfer {
            mint: "other-mint".to_string(),
            token_amount: "9".to_string(),
            ..TokenTransfer::default()
        }];
        let Some(record) = extractor.extract(&notification, &pools()) else {
            panic!("expected a record");
        };
        assert_eq!(record.base_amount, "0");
        assert_eq!(record.direction, SwapDirection::Buy);
    }

    #[test]
    fn description_off_convention_defaults_quote_to_zero() {
        let extractor = SwapEventExtractor::new(MINT);
        let mut notification = tracked();
        notification.description = "transfer of funds".to_string();
        let Some(record) = extractor.extract(&notification, &pools()) else {
            panic!("expected a record");
        };
        assert_eq!(record.quote_amount, "0");
    }

    #[test]
    fn empty_description_defaults_quote_to_zero() {
        let extractor = SwapEventExtractor::new(MINT);
        let mut notification = tracked();
        notification.description.clear();
        let Some(record) = extractor.extract(&notification, &pools()) else {
            panic!("expected a record");
        };
        assert_eq!(record.quote_amount, "0");
    }

    #[test]
    fn extraction_is_total_over_sparse_input() {
        let extractor = SwapEventExtractor::new(MINT);
        let notification = ActivityNotification {
            account_data: vec![AccountData {
                account: "pool1".to_string(),
                ..AccountData::default()
            }],
            ..ActivityNotification::default()
        };
        let Some(record) = extractor.extract(&notification, &pools()) else {
            panic!("expected a record");
        };
        assert_eq!(record.wallet, "unknown");
        assert_eq!(record.base_amount, "0");
        assert_eq!(record.quote_amount, "0");
    }
}
