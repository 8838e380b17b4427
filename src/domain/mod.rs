//! Domain layer: core types, activity model, and the fan-out event bus.
//!
//! This module contains the gateway's domain model: the ledger network
//! enumeration, sign-request and swap-intent value objects, the
//! webhook activity model with the tracked-pool membership lookup, the
//! normalized swap record, and the broadcast event bus used as the
//! fan-out publish primitive.

pub mod activity;
pub mod event_bus;
pub mod network;
pub mod sign_request;
pub mod swap_intent;
pub mod swap_record;

pub use activity::{
    AccountData, ActivityNotification, NativeTransfer, TokenTransfer, TrackedPoolSet,
    tracked_entry,
};
pub use event_bus::{EventBus, FanoutMessage};
pub use network::Network;
pub use sign_request::{SignIntent, SignRequest, SignRequestStatus};
pub use swap_intent::SwapIntent;
pub use swap_record::{SwapDirection, SwapRecord};
