//! Prediction & risk handlers

use axum::{extract::State, Json};
use vitalsense_core::logic::risk;
use vitalsense_core::{Assessment, FeatureVector, RiskAssessment};

use crate::extract::AppJson;
use crate::models::VitalsRequest;
use crate::{AppResult, AppState};

/// Classify and attach severity, risk score and recommendations
pub async fn predict(
    State(state): State<AppState>,
    AppJson(req): AppJson<VitalsRequest>,
) -> AppResult<Json<Assessment>> {
    let features = FeatureVector::from(req);
    let assessment = state.predictor.assess(&features)?;

    tracing::info!(
        "Prediction: {} ({:.1}%), risk score {}",
        assessment.prediction.label,
        assessment.prediction.confidence * 100.0,
        assessment.risk.score
    );
    Ok(Json(assessment))
}

/// Rule-based score only; same input validation as `predict`
pub async fn risk(AppJson(req): AppJson<VitalsRequest>) -> AppResult<Json<RiskAssessment>> {
    let features = FeatureVector::from(req);
    features.validate()?;
    Ok(Json(risk::assess(&features)))
}
