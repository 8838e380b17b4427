//! Swap-event classification.

use crate::domain::{ActivityNotification, TrackedPoolSet, tracked_entry};

/// Returns `true` iff the notification touches a tracked pool account.
///
/// Pure, total set-membership test over `accountData` — deliberately
/// permissive: any notification naming a tracked pool, regardless of
/// transaction type, is handed to extraction. Empty account data is
/// never relevant. Built on the same [`tracked_entry`] lookup the
/// extractor uses, so the two cannot disagree.
#[must_use]
pub fn is_relevant(notification: &ActivityNotification, pools: &TrackedPoolSet) -> bool {
    tracked_entry(notification, pools).is_some()
}
