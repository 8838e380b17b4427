//! WebSocket layer: the fan-out surface subscribed listeners attach to.
//!
//! The endpoint at `/ws` is forward-only: every connection receives
//! each published swap record as a JSON envelope. Clients send nothing
//! except close frames.

pub mod connection;
pub mod handler;
pub mod messages;
