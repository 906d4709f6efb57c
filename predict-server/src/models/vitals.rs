//! Vital-sign request body

use serde::{Deserialize, Serialize};
use vitalsense_core::FeatureVector;

/// Body of `POST /api/v1/predict` and `POST /api/v1/risk`
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct VitalsRequest {
    pub age: f64,
    pub blood_pressure: f64,
    pub glucose_level: f64,
    pub heart_rate: f64,
}

impl From<VitalsRequest> for FeatureVector {
    fn from(req: VitalsRequest) -> Self {
        FeatureVector::new(req.age, req.blood_pressure, req.glucose_level, req.heart_rate)
    }
}
