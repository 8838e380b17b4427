//! REST endpoint handlers organized by resource.

pub mod sign;
pub mod swap;
pub mod system;
pub mod webhook;

use axum::Router;

use crate::app_state::AppState;

/// Composes all resource routes under `/api`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(sign::routes())
        .merge(swap::routes())
        .merge(webhook::routes())
}
