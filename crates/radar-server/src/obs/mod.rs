//! Lightweight in-process metrics.
//!
//! Counters and histograms are stored as atomics and rendered in Prometheus
//! text format by the `/metrics` handler. `track_requests` feeds the HTTP
//! series from an axum middleware.

pub mod metrics;
pub mod middleware;

pub use metrics::RadarMetrics;
pub use middleware::track_requests;
