//! Router assembly.
//!
//! Combines the API routes, the static file fallback, and the middleware
//! stack into one `Router`. The binary adds the Sentry layers on top.
//!
//! Path normalization wraps the whole inner router so that the rewrite
//! happens before any route is matched.

use axum::{
    Router,
    extract::{DefaultBodyLimit, Request},
    middleware,
};
use tower_http::{catch_panic::CatchPanicLayer, services::ServeDir, trace::TraceLayer};
use tracing::Span;

use crate::error::panic_response;
use crate::extract::BODY_LIMIT_BYTES;
use crate::middleware::{
    cors_layer, normalize_path_middleware, origin_guard_middleware, request_id_middleware,
};
use crate::routes;
use crate::state::AppState;

/// Build the application router for the given state.
pub fn build_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config().static_dir);

    let app = Router::new()
        .merge(routes::routes())
        .fallback_service(static_files)
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .layer(cors_layer(state.config()))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            origin_guard_middleware,
        ))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(make_span))
        .layer(CatchPanicLayer::custom(panic_response))
        .with_state(state);

    Router::new()
        .fallback_service(app)
        .layer(middleware::from_fn(normalize_path_middleware))
}

/// Request span with a slot for the request ID.
fn make_span(request: &Request) -> Span {
    tracing::info_span!(
        "http_request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = tracing::field::Empty,
    )
}
