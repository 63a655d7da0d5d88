//! Axum router wiring.

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::get,
    Router,
};

use crate::{api, app_state::AppState, obs, ops};

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.cfg().server.max_body_bytes;

    Router::new()
        .route("/", get(ops::root))
        .route("/health", get(ops::health))
        .route("/metrics", get(ops::metrics))
        .route("/releases", get(api::releases::list).post(api::releases::create))
        .route("/releases/:version", get(api::releases::get_one))
        .route("/analysis/:version", get(api::analysis::analyze))
        .route("/timeline", get(api::releases::timeline))
        .route_layer(middleware::from_fn_with_state(state.clone(), obs::track_requests))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
