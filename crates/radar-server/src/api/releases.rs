use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use chrono::Utc;

use radar_core::error::Result;
use radar_core::model::{CreateRelease, ReleaseRecord, Timeline};

use super::{rejection_to_error, ApiResult};
use crate::app_state::AppState;

pub async fn create(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CreateRelease>, JsonRejection>,
) -> ApiResult<Json<ReleaseRecord>> {
    match register(&state, payload) {
        Ok(rec) => {
            state
                .metrics()
                .releases_created
                .inc(&[("status", rec.status.as_str())]);
            tracing::info!(version = %rec.version, commit = %rec.commit, status = rec.status.as_str(), "release registered");
            Ok(Json(rec))
        }
        Err(e) => {
            let code = e.client_code().as_str();
            state.metrics().release_rejections.inc(&[("reason", code)]);
            tracing::debug!(error = %e, code, "release rejected");
            Err(e.into())
        }
    }
}

fn register(
    state: &AppState,
    payload: std::result::Result<Json<CreateRelease>, JsonRejection>,
) -> Result<ReleaseRecord> {
    let Json(req) = payload.map_err(rejection_to_error)?;
    let record = req.into_record(Utc::now())?;
    state.releases().insert(record)
}

pub async fn list(State(state): State<AppState>) -> Json<Vec<ReleaseRecord>> {
    Json(state.releases().list())
}

pub async fn get_one(
    State(state): State<AppState>,
    Path(version): Path<String>,
) -> ApiResult<Json<ReleaseRecord>> {
    Ok(Json(state.releases().get(&version)?))
}

pub async fn timeline(State(state): State<AppState>) -> Json<Timeline> {
    Json(Timeline::from(state.releases().list()))
}
