//! Configuration module

use std::env;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,

    /// Trained model artifact (written by `vitalsense-train`)
    pub model_path: String,

    /// Dataset shown by the summary endpoint
    pub dataset_path: String,

    /// Environment (development, production)
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),

            model_path: env::var("MODEL_PATH")
                .unwrap_or_else(|_| "model.json".to_string()),

            dataset_path: env::var("DATASET_PATH")
                .unwrap_or_else(|_| "data/dataset.csv".to_string()),

            environment: env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),
        }
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Production logs are JSON lines, development logs are human-readable
    pub fn json_logs(&self) -> bool {
        self.is_production()
    }
}
