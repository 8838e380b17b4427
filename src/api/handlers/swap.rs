//! Swap endpoint handler.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};

use crate::api::dto::{SwapRequestDto, SwapResponseDto};
use crate::app_state::AppState;
use crate::domain::SwapIntent;
use crate::error::{ErrorResponse, GatewayError};

/// `POST /api/swap` — Create a swap sign request.
///
/// Validates the intent, builds the Payment payload, and hands it to
/// the signing service; the user approves it on device.
///
/// # Errors
///
/// Returns [`GatewayError::InvalidIntent`] for missing fields and
/// [`GatewayError::ServiceUnavailable`] when the signing service is
/// unreachable.
#[utoipa::path(
    post,
    path = "/api/swap",
    tag = "Swap",
    summary = "Create a swap sign request",
    request_body = SwapRequestDto,
    responses(
        (status = 200, description = "Sign request created", body = SwapResponseDto),
        (status = 400, description = "Missing or empty intent field", body = ErrorResponse),
        (status = 500, description = "Signing service unreachable", body = ErrorResponse),
    )
)]
pub async fn create_swap(
    State(state): State<AppState>,
    Json(req): Json<SwapRequestDto>,
) -> Result<impl IntoResponse, GatewayError> {
    let intent = SwapIntent::new(
        req.amount,
        req.source_asset,
        req.dest_asset,
        req.counterparty_address,
        req.device_token,
    )?;
    let sign_request = state.broker.create_swap_request(&intent).await?;

    Ok(Json(SwapResponseDto {
        message: "swap sign request created".to_string(),
        sign_request,
    }))
}

/// Swap routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/swap", post(create_swap))
}
