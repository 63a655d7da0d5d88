use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use radar_core::error::{RadarError, Result};
use radar_core::model::ReleaseRecord;

struct StoredRelease {
    record: ReleaseRecord,
    inserted_seq: u64,
}

/// Release store:
/// - `version -> ReleaseRecord`, insert-if-absent only
/// - records are never updated or removed
///
/// Inserts go through the shard-locked entry API, so two concurrent creates
/// of the same version cannot both succeed.
pub struct ReleaseStore {
    releases: DashMap<String, StoredRelease>,
    seq: AtomicU64,
}

impl Default for ReleaseStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ReleaseStore {
    pub fn new() -> Self {
        Self {
            releases: DashMap::new(),
            seq: AtomicU64::new(1),
        }
    }

    /// Store a new release. Fails with `Conflict` if the version exists.
    pub fn insert(&self, record: ReleaseRecord) -> Result<ReleaseRecord> {
        match self.releases.entry(record.version.clone()) {
            Entry::Occupied(_) => Err(RadarError::Conflict(format!(
                "release {} already exists",
                record.version
            ))),
            Entry::Vacant(slot) => {
                let inserted_seq = self.seq.fetch_add(1, Ordering::Relaxed);
                slot.insert(StoredRelease {
                    record: record.clone(),
                    inserted_seq,
                });
                Ok(record)
            }
        }
    }

    pub fn get(&self, version: &str) -> Result<ReleaseRecord> {
        self.releases
            .get(version)
            .map(|r| r.value().record.clone())
            .ok_or_else(|| RadarError::NotFound(format!("release {version} not found")))
    }

    /// All releases, most recent `created_at` first.
    /// Equal timestamps fall back to insertion order, later first.
    pub fn list(&self) -> Vec<ReleaseRecord> {
        let mut entries: Vec<(u64, ReleaseRecord)> = self
            .releases
            .iter()
            .map(|r| (r.value().inserted_seq, r.value().record.clone()))
            .collect();

        entries.sort_by(|(a_seq, a), (b_seq, b)| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b_seq.cmp(a_seq))
        });

        entries.into_iter().map(|(_, r)| r).collect()
    }

    pub fn len(&self) -> usize {
        self.releases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.releases.is_empty()
    }
}
