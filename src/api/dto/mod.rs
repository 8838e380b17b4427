//! Data Transfer Objects for REST request/response serialization.
//!
//! Wire field names are camelCase to match the mobile clients; amounts
//! stay string-encoded end to end.

pub mod sign_dto;
pub mod swap_dto;
pub mod webhook_dto;

pub use sign_dto::*;
pub use swap_dto::*;
pub use webhook_dto::*;
