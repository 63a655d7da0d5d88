//! Threshold-based release risk classifier.
//!
//! Three independent comparisons, always evaluated in the same order
//! (error rate, latency, throughput). Every violation contributes one
//! human-readable reason. The classifier never fails and performs no domain
//! validation: negative or absurd values are compared as-is.

use crate::model::{Analysis, MetricsRecord, ReleaseRecord, ReleaseStatus};

/// Error rate above this fraction is a violation (2%).
pub const MAX_ERROR_RATE: f64 = 0.02;
/// P95 latency above this many milliseconds is a violation.
pub const MAX_LATENCY_P95_MS: f64 = 300.0;
/// Throughput below this many requests per second is a violation.
pub const MIN_THROUGHPUT_RPS: f64 = 1000.0;

/// Sole reason reported for a healthy release.
pub const ALL_WITHIN_THRESHOLDS: &str = "all metrics within acceptable thresholds";
/// Sole reason reported when a release has no metrics.
pub const NO_METRICS_AVAILABLE: &str = "no metrics available";

/// Outcome of classifying one metrics record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub status: ReleaseStatus,
    pub reasons: Vec<String>,
}

/// Classify metrics into `OK` or `RISKY` with ordered reasons.
pub fn classify(metrics: &MetricsRecord) -> Classification {
    let mut reasons = Vec::new();

    if metrics.error_rate > MAX_ERROR_RATE {
        reasons.push(format!(
            "error rate too high: {:.1}% (threshold: {:.1}%)",
            metrics.error_rate * 100.0,
            MAX_ERROR_RATE * 100.0
        ));
    }

    if metrics.latency_p95_ms > MAX_LATENCY_P95_MS {
        reasons.push(format!(
            "P95 latency exceeds threshold: {}ms (threshold: {}ms)",
            metrics.latency_p95_ms, MAX_LATENCY_P95_MS
        ));
    }

    if metrics.throughput_rps < MIN_THROUGHPUT_RPS {
        reasons.push(format!(
            "throughput too low: {} req/s (minimum: {} req/s)",
            metrics.throughput_rps, MIN_THROUGHPUT_RPS
        ));
    }

    if reasons.is_empty() {
        Classification {
            status: ReleaseStatus::Ok,
            reasons: vec![ALL_WITHIN_THRESHOLDS.to_string()],
        }
    } else {
        Classification {
            status: ReleaseStatus::Risky,
            reasons,
        }
    }
}

/// Build the analysis view of a stored release.
///
/// Releases without metrics report `UNKNOWN` and skip classification.
/// The stored payload is echoed unchanged; zero defaults apply only to the
/// classifier input.
pub fn analyze(release: &ReleaseRecord) -> Analysis {
    match &release.metrics {
        None => Analysis {
            version: release.version.clone(),
            status: ReleaseStatus::Unknown,
            metrics: None,
            reasons: vec![NO_METRICS_AVAILABLE.to_string()],
        },
        Some(m) => {
            let c = classify(&m.resolve());
            Analysis {
                version: release.version.clone(),
                status: c.status,
                metrics: Some(*m),
                reasons: c.reasons,
            }
        }
    }
}
