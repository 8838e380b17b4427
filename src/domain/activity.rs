//! Ledger-activity webhook model and tracked-pool lookup.
//!
//! Notifications arrive as camelCase JSON pushed by the activity
//! source. Deserialization is deliberately lenient: every field
//! defaults when absent, so one malformed notification can degrade to
//! empty fields instead of failing the batch.
//!
//! [`tracked_entry`] is the single membership lookup shared by the
//! classifier and the extractor, so the two can never disagree on
//! which notifications touch a tracked pool.

use std::collections::HashSet;

use serde::{Deserialize, Deserializer, Serialize};

/// One account's view of a transaction, with its token-balance deltas.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccountData {
    /// Ledger account identifier.
    pub account: String,
    /// Per-token balance deltas, kept opaque.
    pub token_balance_changes: Vec<serde_json::Value>,
}

/// A native-asset transfer inside a transaction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NativeTransfer {
    /// Sending wallet.
    pub from_user_account: String,
    /// Receiving wallet.
    pub to_user_account: String,
    /// Transferred amount in the chain's base unit.
    pub amount: i64,
}

/// A token transfer inside a transaction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TokenTransfer {
    /// Mint identifier of the transferred token.
    pub mint: String,
    /// Transferred amount, preserved in its source representation.
    #[serde(deserialize_with = "amount_string")]
    pub token_amount: String,
    /// Sending wallet.
    pub from_user_account: String,
    /// Receiving wallet.
    pub to_user_account: String,
}

/// One ledger-activity notification from the webhook source.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActivityNotification {
    /// Unix timestamp of the transaction, seconds.
    pub timestamp: i64,
    /// Per-account transaction views, in source order.
    pub account_data: Vec<AccountData>,
    /// Native-asset transfers, in source order.
    pub native_transfers: Vec<NativeTransfer>,
    /// Token transfers, in source order.
    pub token_transfers: Vec<TokenTransfer>,
    /// Free-text transaction summary from the activity source.
    pub description: String,
}

/// Accepts a JSON number or string and preserves it as a string.
///
/// The activity source is inconsistent about numeric encoding; amounts
/// stay string-encoded end to end to avoid precision loss.
fn amount_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

/// Immutable process-wide set of tracked liquidity-pool accounts.
#[derive(Debug, Clone, Default)]
pub struct TrackedPoolSet {
    pools: HashSet<String>,
}

impl TrackedPoolSet {
    /// Builds the set from pool account identifiers.
    #[must_use]
    pub fn new<I, S>(pools: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            pools: pools.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns `true` if the account is a tracked pool.
    #[must_use]
    pub fn contains(&self, account: &str) -> bool {
        self.pools.contains(account)
    }

    /// Number of tracked pools.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pools.len()
    }

    /// Returns `true` if no pools are tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }
}

/// Finds the first `accountData` entry naming a tracked pool.
///
/// This is the single membership test behind both classification and
/// extraction. `None` for notifications that touch no tracked pool.
#[must_use]
pub fn tracked_entry<'a>(
    notification: &'a ActivityNotification,
    pools: &TrackedPoolSet,
) -> Option<&'a AccountData> {
    notification
        .account_data
        .iter()
        .find(|entry| pools.contains(&entry.account))
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn pool_notification(account: &str) -> ActivityNotification {
        ActivityNotification {
            account_data: vec![
                AccountData {
                    account: "bystander".to_string(),
                    ..AccountData::default()
                },
                AccountData {
                    account: account.to_string(),
                    ..AccountData::default()
                },
            ],
            ..ActivityNotification::default()
        }
    }

    #[test]
    fn tracked_entry_finds_pool_account() {
        let pools = TrackedPoolSet::new(["poolA"]);
        let notification = pool_notification("poolA");
        let Some(entry) = tracked_entry(&notification, &pools) else {
            panic!("expected a tracked entry");
        };
        assert_eq!(entry.account, "poolA");
    }

    #[test]
    fn tracked_entry_none_for_untracked_accounts() {
        let pools = TrackedPoolSet::new(["poolA"]);
        let notification = pool_notification("poolB");
        assert!(tracked_entry(&notification, &pools).is_none());
    }

    #[test]
    fn tracked_entry_none_for_empty_account_data() {
        let pools = TrackedPoolSet::new(["poolA"]);
        let notification = ActivityNotification::default();
        assert!(tracked_entry(&notification, &pools).is_none());
    }

    #[test]
    fn lenient_deserialization_defaults_absent_fields() {
        let json = r#"{"description":"hello"}"#;
        let Ok(notification) = serde_json::from_str::<ActivityNotification>(json) else {
            panic!("expected lenient parse");
        };
        assert!(notification.account_data.is_empty());
        assert_eq!(notification.description, "hello");
        assert_eq!(notification.timestamp, 0);
    }

    #[test]
    fn token_amount_accepts_number_or_string() {
        let json = r#"{"tokenTransfers":[{"mint":"m1","tokenAmount":5},
                                          {"mint":"m2","tokenAmount":"7.25"}]}"#;
        let Ok(notification) = serde_json::from_str::<ActivityNotification>(json) else {
            panic!("expected parse");
        };
        let amounts: Vec<&str> = notification
            .token_transfers
            .iter()
            .map(|t| t.token_amount.as_str())
            .collect();
        assert_eq!(amounts, vec!["5", "7.25"]);
    }
}
