//! Rule-based health score and risk factors
//!
//! Independent of the classifier: a pure function of the four readings.

use serde::{Deserialize, Serialize};

use crate::logic::features::FeatureVector;
use super::rules::*;

// ============================================================================
// SCORE
// ============================================================================

/// 100 minus rule penalties, floored at 0
pub fn risk_score(blood_pressure: f64, glucose_level: f64, heart_rate: f64, age: f64) -> u8 {
    let mut score = BASE_SCORE;

    if blood_pressure > BP_HIGH_THRESHOLD {
        score -= BP_HIGH_PENALTY;
    } else if blood_pressure > BP_ELEVATED_THRESHOLD {
        score -= BP_ELEVATED_PENALTY;
    }

    if glucose_level > GLUCOSE_HIGH_THRESHOLD {
        score -= GLUCOSE_HIGH_PENALTY;
    } else if glucose_level > GLUCOSE_ELEVATED_THRESHOLD {
        score -= GLUCOSE_ELEVATED_PENALTY;
    }

    if heart_rate > HEART_RATE_HIGH_THRESHOLD {
        score -= HEART_RATE_HIGH_PENALTY;
    }

    if age > AGE_THRESHOLD {
        score -= AGE_PENALTY;
    }

    score.clamp(SCORE_FLOOR, BASE_SCORE) as u8
}

// ============================================================================
// BAND
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskBand {
    Excellent,
    Moderate,
    High,
}

impl RiskBand {
    pub fn from_score(score: u8) -> Self {
        if score >= EXCELLENT_MIN_SCORE {
            RiskBand::Excellent
        } else if score >= MODERATE_MIN_SCORE {
            RiskBand::Moderate
        } else {
            RiskBand::High
        }
    }

    pub fn message(&self, score: u8) -> String {
        match self {
            RiskBand::Excellent => format!("Excellent! Your health score is {}/100.", score),
            RiskBand::Moderate => format!(
                "Moderate risk: Your health score is {}/100. Consider lifestyle changes.",
                score
            ),
            RiskBand::High => format!(
                "High risk: Your health score is {}/100. Consult a healthcare provider.",
                score
            ),
        }
    }
}

// ============================================================================
// FACTORS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskFactor {
    pub factor: String,
    pub level: RiskLevel,
}

impl RiskFactor {
    fn new(factor: &str, level: RiskLevel) -> Self {
        Self {
            factor: factor.to_string(),
            level,
        }
    }
}

/// Readings past the same thresholds the score uses. Empty is a normal result.
pub fn risk_factors(features: &FeatureVector) -> Vec<RiskFactor> {
    let mut factors = Vec::new();

    if features.blood_pressure > BP_HIGH_THRESHOLD {
        factors.push(RiskFactor::new("High Blood Pressure", RiskLevel::High));
    } else if features.blood_pressure > BP_ELEVATED_THRESHOLD {
        factors.push(RiskFactor::new("Elevated Blood Pressure", RiskLevel::Medium));
    }

    if features.glucose_level > GLUCOSE_HIGH_THRESHOLD {
        factors.push(RiskFactor::new("High Blood Glucose", RiskLevel::High));
    } else if features.glucose_level > GLUCOSE_ELEVATED_THRESHOLD {
        factors.push(RiskFactor::new("Elevated Blood Glucose", RiskLevel::Medium));
    }

    if features.heart_rate > HEART_RATE_HIGH_THRESHOLD {
        factors.push(RiskFactor::new("High Heart Rate", RiskLevel::Medium));
    }

    if features.age > AGE_THRESHOLD {
        factors.push(RiskFactor::new("Age Factor", RiskLevel::Medium));
    }

    factors
}

// ============================================================================
// ASSESSMENT
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub score: u8,
    pub band: RiskBand,
    pub message: String,
    pub factors: Vec<RiskFactor>,
}

pub fn assess(features: &FeatureVector) -> RiskAssessment {
    let score = risk_score(
        features.blood_pressure,
        features.glucose_level,
        features.heart_rate,
        features.age,
    );
    let band = RiskBand::from_score(score);

    RiskAssessment {
        score,
        band,
        message: band.message(score),
        factors: risk_factors(features),
    }
}
