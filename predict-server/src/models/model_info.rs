//! Model / recommendation response bodies

use serde::Serialize;
use vitalsense_core::logic::features::{FeatureDomain, LayoutInfo, FEATURE_DOMAINS};
use vitalsense_core::{ConditionSeverity, PredictorStatus, Recommendation, TrainingReport};

#[derive(Debug, Serialize)]
pub struct ModelInfo {
    #[serde(flatten)]
    pub status: PredictorStatus,
    pub layout: LayoutInfo,
    pub domains: Vec<FeatureDomain>,
    pub report: TrainingReport,
}

impl ModelInfo {
    pub fn domains() -> Vec<FeatureDomain> {
        FEATURE_DOMAINS.to_vec()
    }
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    #[serde(flatten)]
    pub recommendation: Recommendation,
    pub severity: ConditionSeverity,
    pub advice: &'static str,
}
