//! Authentication layer: signature verification and session issuance.

pub mod session;
pub mod verifier;

pub use session::{SessionClaims, SessionIssuer};
pub use verifier::{SignatureVerifier, VerifiedSignature};
