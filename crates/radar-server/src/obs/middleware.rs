use std::time::Instant;

use axum::extract::{MatchedPath, Request, State};
use axum::middleware::Next;
use axum::response::Response;

use crate::app_state::AppState;

/// Record request count and latency per matched route template.
pub async fn track_requests(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| "unmatched".to_owned());
    let method = req.method().as_str().to_owned();
    let started = Instant::now();

    let resp = next.run(req).await;

    let elapsed = started.elapsed();
    let code = resp.status().as_u16().to_string();
    let m = state.metrics();
    m.http_requests.inc(&[
        ("method", method.as_str()),
        ("route", route.as_str()),
        ("code", code.as_str()),
    ]);
    m.request_duration.observe(&[("route", route.as_str())], elapsed);

    tracing::debug!(%method, %route, %code, micros = u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX), "request served");
    resp
}
