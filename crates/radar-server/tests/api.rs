//! HTTP API tests driven through the router without a socket.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use radar_server::{app_state::AppState, config::RadarConfig, router::build_router};

fn app() -> Router {
    build_router(AppState::new(RadarConfig::default()))
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Vec<u8>) {
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, body.to_vec())
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let (status, body) = send(app, req).await;
    (status, serde_json::from_slice(&body).unwrap())
}

async fn post_raw(app: &Router, body: String) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("POST")
        .uri("/releases")
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    let (status, body) = send(app, req).await;
    (status, serde_json::from_slice(&body).unwrap())
}

async fn create(app: &Router, payload: Value) -> (StatusCode, Value) {
    post_raw(app, payload.to_string()).await
}

#[tokio::test]
async fn root_and_health() {
    let app = app();

    let (status, body) = get(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].is_string());

    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn create_ok_and_risky() {
    let app = app();

    let (status, body) = create(
        &app,
        json!({
            "version": "v1.0.0",
            "commit": "abc123",
            "metrics": { "error_rate": 0.005, "latency_p95": 220, "throughput": 1200 }
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["version"], "v1.0.0");
    assert_eq!(body["commit"], "abc123");
    assert_eq!(body["status"], "OK");

    let (status, body) = create(
        &app,
        json!({
            "version": "v1.0.1",
            "commit": "def456",
            "metrics": { "error_rate": 0.05, "latency_p95": 500, "throughput": 500 }
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "RISKY");

    let (status, body) = get(&app, "/analysis/v1.0.1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "RISKY");
    assert_eq!(body["reasons"].as_array().unwrap().len(), 3);
    assert_eq!(body["metrics"]["latency_p95"], 500.0);
}

#[tokio::test]
async fn create_without_version_is_bad_request() {
    let app = app();

    let (status, body) = create(&app, json!({ "commit": "abc" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "VALIDATION_ERROR");

    let (status, _) = create(&app, json!({ "version": "" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = post_raw(&app, "{not json".to_string()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn duplicate_release_conflicts() {
    let app = app();
    let payload = json!({ "version": "v1.0.0", "commit": "abc123" });

    let (status, _) = create(&app, payload.clone()).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = create(&app, payload).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "CONFLICT");
}

#[tokio::test]
async fn list_and_get_release() {
    let app = app();
    create(&app, json!({ "version": "v1.0.0", "commit": "abc" })).await;
    create(&app, json!({ "version": "v1.0.1", "commit": "def" })).await;

    let (status, body) = get(&app, "/releases").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);

    let (status, body) = get(&app, "/releases/v1.0.0").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["version"], "v1.0.0");
    assert_eq!(body["commit"], "abc");
}

#[tokio::test]
async fn unknown_release_is_not_found() {
    let app = app();

    let (status, body) = get(&app, "/releases/v99.99.99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NOT_FOUND");

    let (status, _) = get(&app, "/analysis/v99.99.99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn analysis_without_metrics_is_unknown() {
    let app = app();
    let (_, created) = create(&app, json!({ "version": "v1.0.0" })).await;
    assert_eq!(created["status"], "UNKNOWN");
    assert_eq!(created["commit"], "unknown");
    assert!(created["metrics"].is_null());

    let (status, body) = get(&app, "/analysis/v1.0.0").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "UNKNOWN");
    assert!(body["metrics"].is_null());
    assert_eq!(body["reasons"], json!(["no metrics available"]));
}

#[tokio::test]
async fn timeline_is_most_recent_first() {
    let app = app();
    create(&app, json!({ "version": "v1" })).await;
    create(&app, json!({ "version": "v2" })).await;

    let (status, body) = get(&app, "/timeline").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 2);
    assert_eq!(body["releases"][0]["version"], "v2");
    assert_eq!(body["releases"][1]["version"], "v1");

    let (_, list) = get(&app, "/releases").await;
    assert_eq!(list[0]["version"], "v2");
}

#[tokio::test]
async fn oversize_body_is_rejected() {
    let app = app();
    let commit = "x".repeat(128 * 1024);
    let (status, body) = create(&app, json!({ "version": "v1", "commit": commit })).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body["error"], "PAYLOAD_TOO_LARGE");
}

#[tokio::test]
async fn partial_metrics_are_echoed_as_sent() {
    let app = app();
    let (status, body) = create(&app, json!({ "version": "b", "metrics": { "error_rate": 0.001 } })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "RISKY");
    assert_eq!(body["metrics"], json!({ "error_rate": 0.001 }));

    let (_, body) = get(&app, "/releases/b").await;
    assert_eq!(body["metrics"], json!({ "error_rate": 0.001 }));

    let (status, body) = get(&app, "/analysis/b").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["metrics"], json!({ "error_rate": 0.001 }));
    assert_eq!(body["reasons"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn metrics_endpoint_reports_activity() {
    let state = AppState::new(RadarConfig::default());
    let app = build_router(state.clone());
    create(&app, json!({ "version": "v1", "metrics": { "error_rate": 0.5 } })).await;
    create(&app, json!({ "version": "v1" })).await;

    let m = state.metrics();
    assert_eq!(m.releases_created.get(&[("status", "RISKY")]), 1);
    assert_eq!(m.releases_created.get(&[("status", "OK")]), 0);
    assert_eq!(m.release_rejections.get(&[("reason", "CONFLICT")]), 1);
    assert_eq!(
        m.http_requests
            .get(&[("method", "POST"), ("route", "/releases"), ("code", "409")]),
        1
    );
    assert_eq!(m.request_duration.count(&[("route", "/releases")]), 2);

    let req = Request::builder().uri("/metrics").body(Body::empty()).unwrap();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::OK);

    let text = String::from_utf8(body).unwrap();
    assert!(text.contains("radar_releases_created_total{status=\"RISKY\"} 1"));
    assert!(text.contains("radar_releases_stored 1"));
}
