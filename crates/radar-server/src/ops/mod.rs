//! Operational HTTP endpoints.
//!
//! - `/`        : banner
//! - `/health`  : liveness with service version and server time
//! - `/metrics` : Prometheus text format

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde_json::json;

use crate::app_state::AppState;

/// Service version reported by `/health`.
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

pub async fn root() -> impl IntoResponse {
    Json(json!({ "message": "Release Radar API is running" }))
}

pub async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "version": SERVICE_VERSION,
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

pub async fn metrics(State(state): State<AppState>) -> Response {
    let extra = state.metrics_extra();
    let body = state.metrics().render(&extra);

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
        body,
    )
        .into_response()
}
