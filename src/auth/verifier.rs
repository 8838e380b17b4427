//! Signed-message verification.
//!
//! The wallet hands back a hex-encoded envelope containing the signer
//! account, the challenge message, the public key, and an ed25519
//! signature over the message. Verification is pure: any structural or
//! cryptographic failure yields `valid: false`, never an error —
//! rejecting an empty blob up front is the caller's job.

use ed25519_dalek::{Signature, Verifier, VerifyingKey};
use serde::Deserialize;

use crate::domain::Network;

/// Outcome of one verification call.
#[derive(Debug, Clone)]
pub struct VerifiedSignature {
    /// Ledger address recovered from the envelope.
    pub signer_address: String,
    /// Whether the signature checked out.
    pub valid: bool,
}

impl VerifiedSignature {
    fn invalid() -> Self {
        Self {
            signer_address: String::new(),
            valid: false,
        }
    }
}

/// Hex-encoded signed-message envelope as produced by the wallet.
#[derive(Debug, Deserialize)]
struct SignedEnvelope {
    account: String,
    /// Hex-encoded message bytes that were signed.
    message: String,
    /// Hex-encoded ed25519 public key (32 bytes).
    public_key: String,
    /// Hex-encoded ed25519 signature (64 bytes).
    signature: String,
    /// Optional network label stamped into the envelope.
    #[serde(default)]
    network: Option<String>,
}

/// Validates signed-message envelopes for one network.
#[derive(Debug, Clone, Copy)]
pub struct SignatureVerifier {
    network: Network,
}

impl SignatureVerifier {
    /// Creates a verifier bound to the given network.
    #[must_use]
    pub const fn new(network: Network) -> Self {
        Self { network }
    }

    /// Verifies a hex-encoded signed-message envelope and recovers the
    /// signer's address.
    ///
    /// Returns `valid: false` for anything that does not decode, parse,
    /// and verify; it never fails. Callers must reject empty input
    /// before calling (that is an input error, not an invalid
    /// signature).
    #[must_use]
    pub fn verify(&self, raw_hex: &str) -> VerifiedSignature {
        let Ok(raw) = hex::decode(raw_hex.trim()) else {
            return VerifiedSignature::invalid();
        };
        let Ok(envelope) = serde_json::from_slice::<SignedEnvelope>(&raw) else {
            return VerifiedSignature::invalid();
        };
        if envelope.account.is_empty() {
            return VerifiedSignature::invalid();
        }
        if let Some(label) = &envelope.network
            && Network::from_label(label) != self.network
        {
            return VerifiedSignature::invalid();
        }

        let Ok(message) = hex::decode(&envelope.message) else {
            return VerifiedSignature::invalid();
        };
        let Ok(public_key) = hex::decode(&envelope.public_key) else {
            return VerifiedSignature::invalid();
        };
        let Ok(signature) = hex::decode(&envelope.signature) else {
            return VerifiedSignature::invalid();
        };

        let key_bytes: [u8; 32] = match public_key.as_slice().try_into() {
            Ok(bytes) => bytes,
            Err(_) => return VerifiedSignature::invalid(),
        };
        let sig_bytes: [u8; 64] = match signature.as_slice().try_into() {
            Ok(bytes) => bytes,
            Err(_) => return VerifiedSignature::invalid(),
        };
        let Ok(verifying_key) = VerifyingKey::from_bytes(&key_bytes) else {
            return VerifiedSignature::invalid();
        };
        let signature = Signature::from_bytes(&sig_bytes);

        if verifying_key.verify(&message, &signature).is_ok() {
            VerifiedSignature {
                signer_address: envelope.account,
                valid: true,
            }
        } else {
            VerifiedSignature::invalid()
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use ed25519_dalek::{Signer, SigningKey};
    use rand::rngs::OsRng;

    fn signed_envelope_hex(account: &str, message: &[u8], tamper: bool) -> String {
        let signing_key = SigningKey::generate(&mut OsRng);
        let signature = signing_key.sign(message);
        let mut sig_bytes = signature.to_bytes();
        if tamper && let Some(byte) = sig_bytes.first_mut() {
            *byte ^= 0xff;
        }
        let envelope = serde_json::json!({
            "account": account,
            "message": hex::encode(message),
            "public_key": hex::encode(signing_key.verifying_key().to_bytes()),
            "signature": hex::encode(sig_bytes),
        });
        hex::encode(envelope.to_string())
    }

    #[test]
    fn valid_envelope_recovers_signer() {
        let verifier = SignatureVerifier::new(Network::Main);
        let blob = signed_envelope_hex("rSigner1", b"login challenge", false);
        let result = verifier.verify(&blob);
        assert!(result.valid);
        assert_eq!(result.signer_address, "rSigner1");
    }

    #[test]
    fn tampered_signature_is_invalid() {
        let verifier = SignatureVerifier::new(Network::Main);
        let blob = signed_envelope_hex("rSigner1", b"login challenge", true);
        assert!(!verifier.verify(&blob).valid);
    }

    #[test]
    fn non_hex_input_is_invalid_not_an_error() {
        let verifier = SignatureVerifier::new(Network::Main);
        assert!(!verifier.verify("not hex at all!").valid);
    }

    #[test]
    fn hex_of_garbage_is_invalid() {
        let verifier = SignatureVerifier::new(Network::Main);
        assert!(!verifier.verify(&hex::encode(b"{\"nope\":true}")).valid);
    }

    #[test]
    fn mismatched_network_label_is_invalid() {
        let verifier = SignatureVerifier::new(Network::Main);
        let signing_key = SigningKey::generate(&mut OsRng);
        let message = b"login challenge";
        let signature = signing_key.sign(message);
        let envelope = serde_json::json!({
            "account": "rSigner1",
            "message": hex::encode(message),
            "public_key": hex::encode(signing_key.verifying_key().to_bytes()),
            "signature": hex::encode(signature.to_bytes()),
            "network": "test",
        });
        assert!(!verifier.verify(&hex::encode(envelope.to_string())).valid);
    }
}
