//! Shared application state injected into all Axum handlers.
//!
//! Service handles are constructed once in `main` and injected here,
//! so handlers never reach into globals and tests can substitute a
//! fake signing service behind the same seam.

use std::sync::Arc;
use std::time::Duration;

use crate::auth::{SessionIssuer, SignatureVerifier};
use crate::domain::EventBus;
use crate::relay::EventRelay;
use crate::signing::SignRequestBroker;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Broker for remote sign requests.
    pub broker: Arc<SignRequestBroker>,
    /// Signed-message verifier.
    pub verifier: SignatureVerifier,
    /// Session token issuer.
    pub sessions: Arc<SessionIssuer>,
    /// Lifetime of issued session tokens.
    pub session_ttl: Duration,
    /// Webhook swap-event relay.
    pub relay: Arc<EventRelay>,
    /// Fan-out bus for WebSocket subscriptions.
    pub event_bus: EventBus,
}
