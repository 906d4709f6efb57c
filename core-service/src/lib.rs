//! VitalSense Core - vital-sign classifier training and inference
//!
//! The trainer binary (`vitalsense-train`) and the predict server both sit
//! on top of this library.

pub mod constants;
pub mod logic;

pub use logic::dataset::{load_csv, DataError, Dataset, DatasetSummary};
pub use logic::features::{FeatureVector, ValidationError};
pub use logic::model::{ArtifactError, ModelArtifact, Pipeline};
pub use logic::predictor::{Assessment, Prediction, Predictor, PredictorStatus, UnmappedLabelsError};
pub use logic::recommendations::{ConditionSeverity, Recommendation, RecommendationTable, FALLBACK_KEY};
pub use logic::risk::{risk_score, RiskAssessment, RiskBand};
pub use logic::training::{TrainerConfig, TrainingError, TrainingReport};
