//! Sign-request snapshot types.
//!
//! A [`SignRequest`] is created by the broker against the external
//! signing service and thereafter mutated only by that service; the
//! gateway observes resolution by re-fetching snapshots. Terminal
//! states are immutable once observed.

use serde::{Deserialize, Serialize};

/// What the user is being asked to sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignIntent {
    /// Sign-in challenge proving control of a wallet.
    Login,
    /// Payment transaction executing a swap.
    SwapPayment,
}

/// Resolution state of a sign request as reported by the signing service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignRequestStatus {
    /// Awaiting approval on the user's device.
    Pending,
    /// Signed and resolved.
    Resolved,
    /// Expired before the user acted.
    Expired,
    /// Explicitly rejected on the device.
    Rejected,
}

impl SignRequestStatus {
    /// Returns `true` for states that can no longer change.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Resolved | Self::Expired | Self::Rejected)
    }
}

/// Point-in-time snapshot of a remote sign request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignRequest {
    /// Identifier assigned by the signing service.
    pub id: String,
    /// What the request asks the user to sign.
    pub intent: SignIntent,
    /// Resolution state at the time of the snapshot.
    pub status: SignRequestStatus,
    /// Opaque service-specific blob (QR refs, deep links, tx json).
    pub payload: serde_json::Value,
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn pending_is_not_terminal() {
        assert!(!SignRequestStatus::Pending.is_terminal());
    }

    #[test]
    fn resolved_expired_rejected_are_terminal() {
        assert!(SignRequestStatus::Resolved.is_terminal());
        assert!(SignRequestStatus::Expired.is_terminal());
        assert!(SignRequestStatus::Rejected.is_terminal());
    }
}
