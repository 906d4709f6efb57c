//! Feature Vector - Core data structure for classifier input
//!
//! Named vital-sign fields, always flattened in `FEATURE_LAYOUT` order.
//!
//! Domain policy: values outside `FEATURE_DOMAINS` (or non-finite values)
//! are **rejected** with a `ValidationError`. Nothing is clamped.

use serde::{Deserialize, Serialize};
use super::layout::{FEATURE_COUNT, FEATURE_LAYOUT};

// ============================================================================
// FEATURE DOMAINS
// ============================================================================

/// Accepted closed range for one feature
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureDomain {
    pub name: &'static str,
    pub unit: &'static str,
    pub min: f64,
    pub max: f64,
}

impl FeatureDomain {
    pub fn contains(&self, value: f64) -> bool {
        value.is_finite() && value >= self.min && value <= self.max
    }
}

pub const AGE_DOMAIN: FeatureDomain = FeatureDomain { name: "age", unit: "years", min: 18.0, max: 90.0 };
pub const BLOOD_PRESSURE_DOMAIN: FeatureDomain = FeatureDomain { name: "blood_pressure", unit: "mmHg", min: 90.0, max: 200.0 };
pub const GLUCOSE_DOMAIN: FeatureDomain = FeatureDomain { name: "glucose_level", unit: "mg/dL", min: 70.0, max: 300.0 };
pub const HEART_RATE_DOMAIN: FeatureDomain = FeatureDomain { name: "heart_rate", unit: "bpm", min: 50.0, max: 120.0 };

/// Domains in layout order
pub const FEATURE_DOMAINS: [FeatureDomain; FEATURE_COUNT] = [
    AGE_DOMAIN,
    BLOOD_PRESSURE_DOMAIN,
    GLUCOSE_DOMAIN,
    HEART_RATE_DOMAIN,
];

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// One field outside its documented domain
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldViolation {
    pub field: &'static str,
    pub value: f64,
    pub min: f64,
    pub max: f64,
}

impl std::fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {} outside [{}, {}]", self.field, self.value, self.min, self.max)
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Invalid feature vector: {}", join_violations(.violations))]
pub struct ValidationError {
    pub violations: Vec<FieldViolation>,
}

fn join_violations(violations: &[FieldViolation]) -> String {
    violations.iter().map(|v| v.to_string()).collect::<Vec<_>>().join("; ")
}

// ============================================================================
// FEATURE VECTOR
// ============================================================================

/// Single-record classifier input
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub age: f64,
    pub blood_pressure: f64,
    pub glucose_level: f64,
    pub heart_rate: f64,
}

impl FeatureVector {
    pub fn new(age: f64, blood_pressure: f64, glucose_level: f64, heart_rate: f64) -> Self {
        Self { age, blood_pressure, glucose_level, heart_rate }
    }

    /// Values in `FEATURE_LAYOUT` order
    pub fn to_array(&self) -> [f64; FEATURE_COUNT] {
        [self.age, self.blood_pressure, self.glucose_level, self.heart_rate]
    }

    pub fn from_array(values: [f64; FEATURE_COUNT]) -> Self {
        Self::new(values[0], values[1], values[2], values[3])
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.to_array().get(index).copied()
    }

    /// Check every field against `FEATURE_DOMAINS`, collecting all violations
    pub fn validate(&self) -> Result<(), ValidationError> {
        let violations: Vec<FieldViolation> = FEATURE_DOMAINS
            .iter()
            .zip(self.to_array())
            .filter(|(domain, value)| !domain.contains(*value))
            .map(|(domain, value)| FieldViolation {
                field: domain.name,
                value,
                min: domain.min,
                max: domain.max,
            })
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { violations })
        }
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// JSON form for logging
    pub fn to_log_entry(&self) -> serde_json::Value {
        serde_json::json!({
            "named_values": FEATURE_LAYOUT.iter()
                .zip(self.to_array())
                .map(|(name, value)| (name.to_string(), value))
                .collect::<std::collections::BTreeMap<_, _>>(),
        })
    }
}

impl From<[f64; FEATURE_COUNT]> for FeatureVector {
    fn from(values: [f64; FEATURE_COUNT]) -> Self {
        Self::from_array(values)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_array_follows_layout() {
        let vector = FeatureVector::new(45.0, 120.0, 100.0, 72.0);
        assert_eq!(vector.to_array(), [45.0, 120.0, 100.0, 72.0]);
        assert_eq!(vector.get(2), Some(100.0));
        assert_eq!(vector.get(4), None);
    }

    #[test]
    fn test_domains_follow_layout() {
        for (domain, name) in FEATURE_DOMAINS.iter().zip(FEATURE_LAYOUT) {
            assert_eq!(domain.name, *name);
        }
    }

    #[test]
    fn test_validation_accepts_boundaries() {
        assert!(FeatureVector::new(18.0, 90.0, 70.0, 50.0).is_valid());
        assert!(FeatureVector::new(90.0, 200.0, 300.0, 120.0).is_valid());
    }

    #[test]
    fn test_validation_collects_every_violation() {
        let err = FeatureVector::new(-5.0, 120.0, f64::NAN, 400.0)
            .validate()
            .unwrap_err();

        let fields: Vec<_> = err.violations.iter().map(|v| v.field).collect();
        assert_eq!(fields, vec!["age", "glucose_level", "heart_rate"]);
        assert!(err.to_string().contains("age = -5"));
    }

    #[test]
    fn test_to_log_entry() {
        let log = FeatureVector::new(45.0, 120.0, 100.0, 72.0).to_log_entry();
        assert_eq!(log["named_values"]["heart_rate"], 72.0);
    }
}
