//! Risk Module - rule-based health score
//!
//! `rules` holds thresholds, `score` applies them.

pub mod rules;
pub mod score;


pub use score::{assess, risk_factors, risk_score, RiskAssessment, RiskBand, RiskFactor, RiskLevel};
