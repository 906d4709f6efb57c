//! Dataset summary handler

use axum::{extract::State, Json};
use vitalsense_core::{load_csv, DatasetSummary};

use crate::{AppResult, AppState};

/// Class distribution of the configured dataset, read on each request
pub async fn summary(State(state): State<AppState>) -> AppResult<Json<DatasetSummary>> {
    let path = state.config.dataset_path.clone();
    let dataset = tokio::task::spawn_blocking(move || load_csv(path)).await??;
    Ok(Json(dataset.summary()))
}
