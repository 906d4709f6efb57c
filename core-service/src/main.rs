//! VitalSense Trainer - Main Entry Point
//!
//! Loads the dataset, trains, writes the artifact. Configured through
//! `VITALSENSE_*` environment variables (see `constants.rs`).

use std::path::PathBuf;
use std::process;

use vitalsense_core::constants;
use vitalsense_core::logic::training::{train_from_csv, TrainerConfig};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting {} trainer v{}...", constants::APP_NAME, constants::APP_VERSION);

    let dataset_path = PathBuf::from(constants::get_dataset_path());
    let artifact_path = PathBuf::from(constants::get_artifact_path());
    let config = TrainerConfig::from_env();

    log::info!("Dataset: {}", dataset_path.display());
    log::info!("Artifact: {}", artifact_path.display());
    log::info!(
        "Seed: {} | test size: {} | folds: {} | max_iter: {}",
        config.seed,
        config.test_size,
        config.cv_folds,
        config.params.max_iter
    );

    match train_from_csv(&dataset_path, &artifact_path, &config) {
        Ok(artifact) => {
            let report = &artifact.report;
            println!("Model trained and saved as {}", artifact_path.display());
            println!(
                "Mean CV accuracy: {:.3} ({} folds)",
                report.cross_validation.mean_accuracy, report.cross_validation.folds_used
            );
            println!("Accuracy on training set: {:.4}", report.train_accuracy);
            println!("Accuracy on test set: {:.4}", report.test_accuracy);
        }
        Err(e) => {
            log::error!("Training failed: {}", e);
            process::exit(1);
        }
    }
}
