use axum::{
    extract::{Path, State},
    Json,
};

use radar_core::classifier;
use radar_core::model::Analysis;

use super::ApiResult;
use crate::app_state::AppState;

/// Re-run classification over the stored metrics of one release.
pub async fn analyze(
    State(state): State<AppState>,
    Path(version): Path<String>,
) -> ApiResult<Json<Analysis>> {
    let release = state.releases().get(&version)?;
    let analysis = classifier::analyze(&release);
    tracing::debug!(%version, status = analysis.status.as_str(), reasons = analysis.reasons.len(), "release analyzed");
    Ok(Json(analysis))
}
