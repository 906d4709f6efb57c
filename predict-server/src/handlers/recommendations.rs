//! Recommendations handler

use axum::{extract::{Path, State}, Json};
use vitalsense_core::ConditionSeverity;

use crate::models::RecommendationResponse;
use crate::AppState;

/// Unknown labels get the fallback list, flagged in the body
pub async fn get(
    State(state): State<AppState>,
    Path(label): Path<String>,
) -> Json<RecommendationResponse> {
    let severity = ConditionSeverity::from_label(&label);
    Json(RecommendationResponse {
        recommendation: state.predictor.recommend(&label),
        severity,
        advice: severity.advice(),
    })
}
