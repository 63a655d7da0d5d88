//! Release model: metrics, release records, and the request/response shapes
//! that cross the HTTP boundary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::classifier;
use crate::error::{RadarError, Result};

/// Commit recorded when the client does not send one.
pub const DEFAULT_COMMIT: &str = "unknown";

/// Risk status assigned to a release once, at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReleaseStatus {
    /// No metrics were attached.
    Unknown,
    /// All metrics within thresholds.
    Ok,
    /// At least one threshold violated.
    Risky,
}

impl ReleaseStatus {
    /// Wire label, also used as a metrics label value.
    pub fn as_str(self) -> &'static str {
        match self {
            ReleaseStatus::Unknown => "UNKNOWN",
            ReleaseStatus::Ok => "OK",
            ReleaseStatus::Risky => "RISKY",
        }
    }
}

/// Classifier input: one value per metric, missing ones already zeroed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricsRecord {
    /// Fraction of failed requests (0.02 == 2%).
    pub error_rate: f64,
    /// 95th-percentile latency in milliseconds.
    pub latency_p95_ms: f64,
    /// Sustained requests per second.
    pub throughput_rps: f64,
}

/// Metrics as sent by clients. Every field is optional and is stored and
/// echoed back exactly as received; absent fields stay absent on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricsPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latency_p95: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub throughput: Option<f64>,
}

impl MetricsPayload {
    /// True when no field was supplied at all (`{}`).
    pub fn is_empty(&self) -> bool {
        self.error_rate.is_none() && self.latency_p95.is_none() && self.throughput.is_none()
    }

    /// Wire names of the fields the client left out.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut out = Vec::new();
        if self.error_rate.is_none() {
            out.push("error_rate");
        }
        if self.latency_p95.is_none() {
            out.push("latency_p95");
        }
        if self.throughput.is_none() {
            out.push("throughput");
        }
        out
    }

    /// Classifier input. Missing fields count as zero here only.
    pub fn resolve(&self) -> MetricsRecord {
        MetricsRecord {
            error_rate: self.error_rate.unwrap_or(0.0),
            latency_p95_ms: self.latency_p95.unwrap_or(0.0),
            throughput_rps: self.throughput.unwrap_or(0.0),
        }
    }
}

/// Body of `POST /releases`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateRelease {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub commit: Option<String>,
    #[serde(default)]
    pub metrics: Option<MetricsPayload>,
}

impl CreateRelease {
    /// Validate the request and build the record, classifying it when
    /// metrics are present.
    pub fn into_record(self, created_at: DateTime<Utc>) -> Result<ReleaseRecord> {
        let version = match self.version {
            Some(v) if !v.is_empty() => v,
            _ => return Err(RadarError::Validation("field 'version' is required".into())),
        };

        let metrics = match self.metrics {
            Some(m) if !m.is_empty() => {
                let missing = m.missing_fields();
                if !missing.is_empty() {
                    tracing::warn!(%version, ?missing, "metrics fields missing, classifying them as zero");
                }
                Some(m)
            }
            _ => None,
        };

        let commit = self.commit.unwrap_or_else(|| DEFAULT_COMMIT.to_string());
        Ok(ReleaseRecord::new(version, commit, metrics, created_at))
    }
}

/// A tracked release. Status is fixed at creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReleaseRecord {
    pub version: String,
    pub commit: String,
    pub created_at: DateTime<Utc>,
    pub status: ReleaseStatus,
    pub metrics: Option<MetricsPayload>,
}

impl ReleaseRecord {
    pub fn new(
        version: String,
        commit: String,
        metrics: Option<MetricsPayload>,
        created_at: DateTime<Utc>,
    ) -> Self {
        let status = match &metrics {
            Some(m) => classifier::classify(&m.resolve()).status,
            None => ReleaseStatus::Unknown,
        };
        Self {
            version,
            commit,
            created_at,
            status,
            metrics,
        }
    }
}

/// Body of `GET /analysis/{version}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub version: String,
    pub status: ReleaseStatus,
    pub metrics: Option<MetricsPayload>,
    pub reasons: Vec<String>,
}

/// Body of `GET /timeline`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    pub releases: Vec<ReleaseRecord>,
    pub count: usize,
}

impl From<Vec<ReleaseRecord>> for Timeline {
    fn from(releases: Vec<ReleaseRecord>) -> Self {
        let count = releases.len();
        Self { releases, count }
    }
}
