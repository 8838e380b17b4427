//! # signal-gateway
//!
//! REST and WebSocket gateway for mobile-wallet sign-in and on-chain
//! swap event relay.
//!
//! The gateway brokers asynchronous sign requests against an external
//! wallet-signing service (login and swap-payment intents), converts
//! resolved signatures into short-lived session tokens, and relays
//! swap activity detected in ledger webhook batches to subscribed
//! listeners. All wallet cryptography and ledger validity rules are
//! delegated to external services — this crate is a coordination layer.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP, WebSocket)          Activity source (webhook)
//!     │                                  │
//!     ├── REST Handlers (api/)           └── EventRelay (relay/)
//!     ├── WS Handler (ws/)                     │ classify → extract
//!     │                                        ▼
//!     ├── SignRequestBroker (signing/)     EventBus (domain/)
//!     ├── SignatureVerifier (auth/)            │
//!     ├── SessionIssuer (auth/)                └── WS subscribers
//!     │
//!     └── LedgerConnection (ledger/)
//! ```

pub mod api;
pub mod app_state;
pub mod auth;
pub mod config;
pub mod domain;
pub mod error;
pub mod ledger;
pub mod relay;
pub mod signing;
pub mod ws;
