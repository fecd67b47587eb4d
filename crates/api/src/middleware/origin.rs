//! Origin allow-list guard.
//!
//! `tower_http::cors::CorsLayer` only decides which CORS headers to emit; a
//! disallowed origin still reaches the handler. This guard runs outside the
//! CORS layer and refuses such requests outright with 403, preflights
//! included. Requests without an `Origin` header (same-origin navigation,
//! curl, server-to-server) always pass.

use axum::{
    extract::{Request, State},
    http::header::ORIGIN,
    middleware::Next,
    response::Response,
};

use crate::error::AppError;
use crate::state::AppState;

/// Reject requests whose `Origin` is not in the configured allow-list.
///
/// # Errors
///
/// Returns `AppError::OriginNotAllowed` for a present, non-empty origin that
/// is not allowed.
pub async fn origin_guard_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if let Some(value) = request.headers().get(ORIGIN) {
        let origin = String::from_utf8_lossy(value.as_bytes());

        if !origin.is_empty() && !state.config().is_origin_allowed(&origin) {
            tracing::warn!(origin = %origin, "Blocked by CORS");
            return Err(AppError::OriginNotAllowed(origin.into_owned()));
        }
    }

    Ok(next.run(request).await)
}
