//! Health check handler.

use axum::{Json, extract::State};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::state::AppState;

/// Health check response body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    pub status: &'static str,
    pub cors: &'static str,
    pub allowed_origins: Vec<String>,
    /// UTC, millisecond precision (`2026-01-01T12:00:00.000Z`).
    pub timestamp: String,
}

/// Report liveness, the CORS allow-list, and the server clock.
pub async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "online",
        cors: "enabled",
        allowed_origins: state.config().allowed_origins.clone(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}
