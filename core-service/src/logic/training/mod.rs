//! Training Module - produces the model artifact
//!
//! Seeded split → stratified k-fold diagnostics on the training partition →
//! final fit on the whole training partition → artifact.

pub mod cross_validation;
pub mod report;
pub mod trainer;

#[cfg(test)]
mod tests;

use crate::logic::dataset::DataError;
use crate::logic::model::ArtifactError;

pub use cross_validation::{cross_validate, plan_folds, FoldPlan, DEFAULT_FOLDS};
pub use report::{CrossValidation, TrainingReport};
pub use trainer::{train, train_from_csv, TrainerConfig, TrainingOutcome};

#[derive(Debug, thiserror::Error)]
pub enum TrainingError {
    #[error(transparent)]
    Data(#[from] DataError),

    #[error(transparent)]
    Artifact(#[from] ArtifactError),

    #[error("Class '{label}' has {count} member(s) in the training partition; cross-validation needs at least {required}")]
    InsufficientClassMembers {
        label: String,
        count: usize,
        required: usize,
    },

    #[error("Training partition holds a single class ('{0}')")]
    SingleClass(String),

    #[error("Invalid trainer configuration: {0}")]
    InvalidConfig(String),
}
