//! Trainer - split, cross-validate, refit, persist

use std::path::Path;

use crate::constants;
use crate::logic::dataset::{self, Dataset};
use crate::logic::model::{ArtifactError, LogisticParams, ModelArtifact, Pipeline};
use super::cross_validation::{cross_validate, DEFAULT_FOLDS};
use super::report::TrainingReport;
use super::TrainingError;

#[derive(Debug, Clone, PartialEq)]
pub struct TrainerConfig {
    pub test_size: f64,
    pub seed: u64,
    pub cv_folds: usize,
    pub params: LogisticParams,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            test_size: constants::DEFAULT_TEST_SIZE,
            seed: constants::DEFAULT_SEED,
            cv_folds: DEFAULT_FOLDS,
            params: LogisticParams::default(),
        }
    }
}

impl TrainerConfig {
    pub fn from_env() -> Self {
        Self {
            test_size: constants::get_test_size(),
            seed: constants::get_seed(),
            cv_folds: constants::get_cv_folds(),
            params: LogisticParams {
                max_iter: constants::get_max_iter(),
                ..Default::default()
            },
        }
    }
}

/// Fitted pipeline plus the metrics gathered while producing it
#[derive(Debug, Clone)]
pub struct TrainingOutcome {
    pub pipeline: Pipeline,
    pub report: TrainingReport,
}

impl TrainingOutcome {
    pub fn into_artifact(self) -> Result<ModelArtifact, ArtifactError> {
        ModelArtifact::new(self.pipeline, self.report)
    }
}

/// Held-out rows never reach the scaler statistics or the CV folds.
pub fn train(dataset: &Dataset, config: &TrainerConfig) -> Result<TrainingOutcome, TrainingError> {
    if config.params.max_iter == 0 {
        return Err(TrainingError::InvalidConfig("max_iter must be positive".to_string()));
    }

    let split = dataset.train_test_split(config.test_size, config.seed)?;
    log::info!(
        "Training on {} records, holding out {} (seed {})",
        split.train.len(),
        split.test.len(),
        config.seed
    );

    let cross_validation = cross_validate(&split.train, config.cv_folds, &config.params)?;

    let pipeline = Pipeline::fit(&split.train, &config.params);
    let train_accuracy = pipeline.score(&split.train);
    let test_accuracy = pipeline.score(&split.test);

    let held_out_only: Vec<String> = split
        .test
        .labels()
        .into_iter()
        .filter(|l| !pipeline.classes().contains(l))
        .collect();
    if !held_out_only.is_empty() {
        log::warn!("Held-out labels never seen in training: {}", held_out_only.join(", "));
    }

    let report = TrainingReport {
        total_samples: dataset.len(),
        train_samples: split.train.len(),
        test_samples: split.test.len(),
        seed: config.seed,
        test_size: config.test_size,
        cross_validation,
        train_accuracy,
        test_accuracy,
        classes: pipeline.classes().to_vec(),
        iterations: pipeline.classifier().n_iter(),
        converged: pipeline.classifier().converged(),
    };
    report.log_summary();

    Ok(TrainingOutcome { pipeline, report })
}

/// Load the CSV, train, and write the artifact to `artifact_path`
pub fn train_from_csv(
    dataset_path: &Path,
    artifact_path: &Path,
    config: &TrainerConfig,
) -> Result<ModelArtifact, TrainingError> {
    let dataset = dataset::load_csv(dataset_path)?;
    let artifact = train(&dataset, config)?.into_artifact()?;
    artifact.save(artifact_path)?;
    Ok(artifact)
}
