//! Model metadata handler

use axum::{extract::State, Json};

use crate::models::ModelInfo;
use crate::AppState;

pub async fn info(State(state): State<AppState>) -> Json<ModelInfo> {
    let artifact = state.predictor.artifact();
    Json(ModelInfo {
        status: state.predictor.status(),
        layout: artifact.layout.clone(),
        domains: ModelInfo::domains(),
        report: artifact.report.clone(),
    })
}
