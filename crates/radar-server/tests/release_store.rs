#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;

use chrono::{Duration, TimeZone, Utc};

use radar_core::model::{MetricsPayload, ReleaseRecord, ReleaseStatus};
use radar_server::store::ReleaseStore;

fn release(version: &str, secs: i64) -> ReleaseRecord {
    let at = Utc.timestamp_opt(1_700_000_000, 0).unwrap() + Duration::seconds(secs);
    ReleaseRecord::new(version.into(), "abc".into(), None, at)
}

#[test]
fn insert_then_get() {
    let store = ReleaseStore::new();
    assert!(store.is_empty());

    let stored = store.insert(release("v1.0.0", 0)).unwrap();
    assert_eq!(stored.version, "v1.0.0");
    assert_eq!(store.get("v1.0.0").unwrap(), stored);
    assert_eq!(store.len(), 1);
}

#[test]
fn duplicate_version_conflicts_and_keeps_original() {
    let store = ReleaseStore::new();
    store.insert(release("v1.0.0", 0)).unwrap();

    let m = MetricsPayload {
        error_rate: Some(0.005),
        latency_p95: Some(200.0),
        throughput: Some(1500.0),
    };
    let dup = ReleaseRecord::new("v1.0.0".into(), "other".into(), Some(m), Utc::now());
    let err = store.insert(dup).expect_err("duplicate must fail");
    assert_eq!(err.client_code().as_str(), "CONFLICT");

    let kept = store.get("v1.0.0").unwrap();
    assert_eq!(kept.commit, "abc");
    assert_eq!(kept.status, ReleaseStatus::Unknown);
}

#[test]
fn unknown_version_is_not_found() {
    let store = ReleaseStore::new();
    let err = store.get("v9.9.9").expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "NOT_FOUND");
}

#[test]
fn list_is_most_recent_first() {
    let store = ReleaseStore::new();
    store.insert(release("v1", 10)).unwrap();
    store.insert(release("v3", 30)).unwrap();
    store.insert(release("v2", 20)).unwrap();

    let order: Vec<String> = store.list().into_iter().map(|r| r.version).collect();
    assert_eq!(order, vec!["v3", "v2", "v1"]);
}

#[test]
fn equal_timestamps_fall_back_to_insert_order() {
    let store = ReleaseStore::new();
    store.insert(release("first", 0)).unwrap();
    store.insert(release("second", 0)).unwrap();

    let order: Vec<String> = store.list().into_iter().map(|r| r.version).collect();
    assert_eq!(order, vec!["second", "first"]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_duplicate_creates_admit_exactly_one() {
    let store = Arc::new(ReleaseStore::new());

    let mut handles = Vec::new();
    for i in 0..32 {
        let store = Arc::clone(&store);
        handles.push(tokio::spawn(async move {
            let rec = ReleaseRecord::new("v1.0.0".into(), format!("c{i}"), None, Utc::now());
            store.insert(rec).is_ok()
        }));
    }

    let mut ok = 0;
    for h in handles {
        if h.await.unwrap() {
            ok += 1;
        }
    }
    assert_eq!(ok, 1);
    assert_eq!(store.len(), 1);
}
