//! Gateway error types with HTTP status code mapping.
//!
//! [`GatewayError`] is the central error type for the gateway. Each variant
//! maps to a specific HTTP status code and structured JSON error response.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// {
///   "error": {
///     "code": 1001,
///     "message": "missing parameter: signature",
///     "details": null
///   }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Numeric error code (see code ranges on [`GatewayError`]).
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Server-side error enum with HTTP status code mapping.
///
/// # Error Code Ranges
///
/// | Range     | Category              | HTTP Status               |
/// |-----------|-----------------------|---------------------------|
/// | 1000–1799 | Input validation      | 400 Bad Request           |
/// | 1800–1899 | Signature/credential  | 400 Bad Request           |
/// | 2000–2999 | Not Found             | 404 Not Found             |
/// | 3000–3999 | Server / upstream     | 500 Internal Server Error |
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// A required request parameter or body field was absent.
    #[error("missing parameter: {0}")]
    MissingParameter(String),

    /// Request validation failed.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// A swap intent field was absent or empty.
    #[error("invalid swap intent: {0}")]
    InvalidIntent(String),

    /// Signature was structurally readable but failed verification.
    ///
    /// This is a client-side failure, not a server error.
    #[error("Invalid signature")]
    InvalidSignature,

    /// Sign request with the given id is unknown to the signing service.
    #[error("sign request not found: {0}")]
    RequestNotFound(String),

    /// External signing or ledger service is unreachable.
    #[error("service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl GatewayError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::MissingParameter(_) => 1001,
            Self::InvalidRequest(_) => 1002,
            Self::InvalidIntent(_) => 1003,
            Self::InvalidSignature => 1801,
            Self::RequestNotFound(_) => 2001,
            Self::ServiceUnavailable(_) => 3002,
            Self::Internal(_) => 3000,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingParameter(_)
            | Self::InvalidRequest(_)
            | Self::InvalidIntent(_)
            | Self::InvalidSignature => StatusCode::BAD_REQUEST,
            Self::RequestNotFound(_) => StatusCode::NOT_FOUND,
            Self::ServiceUnavailable(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                message: self.to_string(),
                details: None,
            },
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}
