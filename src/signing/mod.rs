//! Sign-request brokering against the external wallet-signing service.

pub mod broker;
pub mod client;

pub use broker::SignRequestBroker;
pub use client::{HttpSigningService, SigningService};
