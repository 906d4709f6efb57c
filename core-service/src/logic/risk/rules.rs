//! Risk Heuristic Rules & Thresholds
//!
//! Constants only. The scoring logic lives in `score.rs`.
//! Every threshold is exclusive: a reading must be strictly above it.

// ============================================================================
// BASE
// ============================================================================

/// Score before any deduction
pub const BASE_SCORE: i32 = 100;

/// Scores never go below this
pub const SCORE_FLOOR: i32 = 0;

// ============================================================================
// BLOOD PRESSURE (systolic mmHg)
// ============================================================================

pub const BP_HIGH_THRESHOLD: f64 = 140.0;
pub const BP_HIGH_PENALTY: i32 = 30;

pub const BP_ELEVATED_THRESHOLD: f64 = 120.0;
pub const BP_ELEVATED_PENALTY: i32 = 15;

// ============================================================================
// GLUCOSE (mg/dL)
// ============================================================================

pub const GLUCOSE_HIGH_THRESHOLD: f64 = 126.0;
pub const GLUCOSE_HIGH_PENALTY: i32 = 30;

pub const GLUCOSE_ELEVATED_THRESHOLD: f64 = 100.0;
pub const GLUCOSE_ELEVATED_PENALTY: i32 = 15;

// ============================================================================
// HEART RATE (bpm) & AGE (years)
// ============================================================================

pub const HEART_RATE_HIGH_THRESHOLD: f64 = 100.0;
pub const HEART_RATE_HIGH_PENALTY: i32 = 20;

pub const AGE_THRESHOLD: f64 = 65.0;
pub const AGE_PENALTY: i32 = 10;

// ============================================================================
// BANDS
// ============================================================================

/// At or above = Excellent
pub const EXCELLENT_MIN_SCORE: u8 = 80;

/// At or above (and below Excellent) = Moderate, below = High
pub const MODERATE_MIN_SCORE: u8 = 60;
