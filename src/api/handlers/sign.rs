//! Sign-request endpoint handlers: login, status polling, verification.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::dto::{SignRequestResponse, StatusParams, VerifyParams, VerifyResponse};
use crate::app_state::AppState;
use crate::error::{ErrorResponse, GatewayError};

/// `POST /api/sign/login` — Create a login sign request.
///
/// # Errors
///
/// Returns [`GatewayError::ServiceUnavailable`] when the signing
/// service is unreachable.
#[utoipa::path(
    post,
    path = "/api/sign/login",
    tag = "Sign",
    summary = "Create a login sign request",
    description = "Creates a SignIn request on the external signing service. The client polls /api/sign/status until the user approves on device.",
    responses(
        (status = 200, description = "Sign request created", body = SignRequestResponse),
        (status = 500, description = "Signing service unreachable", body = ErrorResponse),
    )
)]
pub async fn create_login(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, GatewayError> {
    let payload = state.broker.create_login_request().await?;
    Ok(Json(SignRequestResponse { payload }))
}

/// `GET /api/sign/status?requestId=<id>` — Poll a sign request.
///
/// # Errors
///
/// Returns [`GatewayError::MissingParameter`] without a `requestId`,
/// [`GatewayError::RequestNotFound`] for unknown ids, and
/// [`GatewayError::ServiceUnavailable`] on lookup failure.
#[utoipa::path(
    get,
    path = "/api/sign/status",
    tag = "Sign",
    summary = "Fetch the current state of a sign request",
    params(
        ("requestId" = String, Query, description = "Sign request id"),
    ),
    responses(
        (status = 200, description = "Current snapshot", body = SignRequestResponse),
        (status = 400, description = "Missing requestId", body = ErrorResponse),
        (status = 404, description = "Unknown request id", body = ErrorResponse),
        (status = 500, description = "Lookup failed", body = ErrorResponse),
    )
)]
pub async fn sign_status(
    State(state): State<AppState>,
    Query(params): Query<StatusParams>,
) -> Result<impl IntoResponse, GatewayError> {
    let request_id = params
        .request_id
        .ok_or_else(|| GatewayError::MissingParameter("requestId".to_string()))?;
    let payload = state.broker.get_request(&request_id).await?;
    Ok(Json(SignRequestResponse { payload }))
}

/// `GET /api/sign/verify?signature=<hex>` — Verify a signed blob and
/// mint a session token.
///
/// An absent or empty `signature` is an input error; a structurally
/// readable blob that fails verification is a verification failure.
/// The two are distinct 400s with different error codes.
///
/// # Errors
///
/// Returns [`GatewayError::MissingParameter`],
/// [`GatewayError::InvalidSignature`], or [`GatewayError::Internal`].
#[utoipa::path(
    get,
    path = "/api/sign/verify",
    tag = "Sign",
    summary = "Verify a signature and issue a session token",
    params(
        ("signature" = String, Query, description = "Hex-encoded signed-message envelope"),
    ),
    responses(
        (status = 200, description = "Signature valid; session issued", body = VerifyResponse),
        (status = 400, description = "Missing or invalid signature", body = ErrorResponse),
        (status = 500, description = "Token issuance failed", body = ErrorResponse),
    )
)]
pub async fn verify_signature(
    State(state): State<AppState>,
    Query(params): Query<VerifyParams>,
) -> Result<impl IntoResponse, GatewayError> {
    let signature = params
        .signature
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| GatewayError::MissingParameter("signature".to_string()))?;

    let verified = state.verifier.verify(&signature);
    if !verified.valid {
        return Err(GatewayError::InvalidSignature);
    }

    let token = state
        .sessions
        .issue(&verified.signer_address, state.session_ttl)?;
    tracing::info!(signer = %verified.signer_address, "session issued");

    Ok(Json(VerifyResponse {
        signer_address: verified.signer_address,
        token,
    }))
}

/// Sign routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/sign/login", post(create_login))
        .route("/sign/status", get(sign_status))
        .route("/sign/verify", get(verify_signature))
}
