//! Central Configuration Constants
//!
//! Single source of truth for trainer defaults.
//! Every value can be overridden from the environment.

/// Default training dataset
pub const DEFAULT_DATASET_PATH: &str = "data/dataset_expanded.csv";

/// Default artifact location (read by the predict server)
pub const DEFAULT_ARTIFACT_PATH: &str = "model.json";

/// Default split seed
pub const DEFAULT_SEED: u64 = 42;

/// Default held-out fraction
pub const DEFAULT_TEST_SIZE: f64 = 0.2;

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "VitalSense";

// ============================================
// Helper functions to read from env with fallback
// ============================================

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|s| s.trim().parse().ok())
}

pub fn get_dataset_path() -> String {
    std::env::var("VITALSENSE_DATASET")
        .unwrap_or_else(|_| DEFAULT_DATASET_PATH.to_string())
}

pub fn get_artifact_path() -> String {
    std::env::var("VITALSENSE_ARTIFACT")
        .unwrap_or_else(|_| DEFAULT_ARTIFACT_PATH.to_string())
}

pub fn get_seed() -> u64 {
    env_parse("VITALSENSE_SEED").unwrap_or(DEFAULT_SEED)
}

pub fn get_test_size() -> f64 {
    env_parse("VITALSENSE_TEST_SIZE").unwrap_or(DEFAULT_TEST_SIZE)
}

pub fn get_cv_folds() -> usize {
    env_parse("VITALSENSE_CV_FOLDS").unwrap_or(crate::logic::training::DEFAULT_FOLDS)
}

pub fn get_max_iter() -> usize {
    env_parse("VITALSENSE_MAX_ITER").unwrap_or(crate::logic::model::logistic::DEFAULT_MAX_ITER)
}
