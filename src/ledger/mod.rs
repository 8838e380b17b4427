//! Ledger node connectivity.

pub mod connection;

pub use connection::LedgerConnection;
