//! Shared application state for the Release Radar server.
//!
//! Owns the release store and the metrics registry for the lifetime of the
//! process. Handlers receive a cheap clone through axum `State`.

use std::sync::Arc;
use std::time::Instant;

use crate::config::RadarConfig;
use crate::obs::RadarMetrics;
use crate::store::ReleaseStore;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    releases: Arc<ReleaseStore>,
    metrics: Arc<RadarMetrics>,
}

struct AppStateInner {
    cfg: RadarConfig,
    started_at: Instant,
}

impl AppState {
    pub fn new(cfg: RadarConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                started_at: Instant::now(),
            }),
            releases: Arc::new(ReleaseStore::new()),
            metrics: Arc::new(RadarMetrics::default()),
        }
    }

    pub fn cfg(&self) -> &RadarConfig {
        &self.inner.cfg
    }

    pub fn releases(&self) -> Arc<ReleaseStore> {
        Arc::clone(&self.releases)
    }

    pub fn metrics(&self) -> &RadarMetrics {
        &self.metrics
    }

    /// Gauge lines computed at scrape time.
    pub fn metrics_extra(&self) -> Vec<(&'static str, u64)> {
        vec![
            ("radar_releases_stored", self.releases.len() as u64),
            ("radar_uptime_seconds", self.inner.started_at.elapsed().as_secs()),
        ]
    }
}
