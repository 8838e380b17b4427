//! Stateless session tokens.
//!
//! A session token is an HS256 JWT binding a verified signer address to
//! an absolute expiry. There is no server-side session table and no
//! revocation list; the embedded expiry is the sole defense against a
//! stale token, checked wherever the token is later presented.

use std::time::Duration;

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::GatewayError;

/// Claims embedded in a session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Verified signer address.
    pub sub: String,
    /// Issuance time, unix seconds.
    pub iat: i64,
    /// Absolute expiry, unix seconds.
    pub exp: i64,
}

/// Mints and decodes session tokens with a process-wide secret.
#[derive(Clone)]
pub struct SessionIssuer {
    secret: String,
}

impl std::fmt::Debug for SessionIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The signing secret must never reach logs.
        f.debug_struct("SessionIssuer").finish_non_exhaustive()
    }
}

impl SessionIssuer {
    /// Creates an issuer around the in-memory signing secret.
    #[must_use]
    pub fn new(secret: &str) -> Self {
        Self {
            secret: secret.to_string(),
        }
    }

    /// Issues a token binding `signer_address` to `now + ttl`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Internal`] if token encoding fails.
    pub fn issue(&self, signer_address: &str, ttl: Duration) -> Result<String, GatewayError> {
        let now = Utc::now().timestamp();
        let ttl_secs = i64::try_from(ttl.as_secs()).unwrap_or(i64::MAX);
        let claims = SessionClaims {
            sub: signer_address.to_string(),
            iat: now,
            exp: now.saturating_add(ttl_secs),
        };
        jsonwebtoken::encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| GatewayError::Internal(format!("token encoding failed: {e}")))
    }

    /// Decodes and validates a token, returning its claims.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::InvalidRequest`] for expired, tampered,
    /// or malformed tokens.
    pub fn decode(&self, token: &str) -> Result<SessionClaims, GatewayError> {
        let validation = Validation::new(Algorithm::HS256);
        jsonwebtoken::decode::<SessionClaims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|e| GatewayError::InvalidRequest(format!("invalid session token: {e}")))
    }
}
