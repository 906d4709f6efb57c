use serde::{Deserialize, Serialize};

/// Cross-validation outcome on the training partition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossValidation {
    pub requested_folds: usize,
    pub folds_used: usize,
    pub fold_scores: Vec<f64>,
    pub mean_accuracy: f64,
    pub std_accuracy: f64,
}

/// Metrics of one training run, stored inside the artifact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingReport {
    pub total_samples: usize,
    pub train_samples: usize,
    pub test_samples: usize,
    pub seed: u64,
    pub test_size: f64,
    pub cross_validation: CrossValidation,
    pub train_accuracy: f64,
    pub test_accuracy: f64,
    pub classes: Vec<String>,
    pub iterations: usize,
    pub converged: bool,
}

impl TrainingReport {
    pub fn log_summary(&self) {
        let cv = &self.cross_validation;
        let scores: Vec<String> = cv.fold_scores.iter().map(|s| format!("{:.3}", s)).collect();

        log::info!("Cross-validation accuracy scores: [{}]", scores.join(", "));
        log::info!(
            "Mean CV accuracy: {:.3} (+/- {:.3}, {} folds)",
            cv.mean_accuracy,
            cv.std_accuracy,
            cv.folds_used
        );
        if cv.folds_used != cv.requested_folds {
            log::warn!("Cross-validation ran {} folds instead of the requested {}", cv.folds_used, cv.requested_folds);
        }
        log::info!("Accuracy on training set: {:.4} ({} samples)", self.train_accuracy, self.train_samples);
        log::info!("Accuracy on test set: {:.4} ({} samples)", self.test_accuracy, self.test_samples);
        log::info!(
            "Classes: {} | iterations: {} | converged: {}",
            self.classes.join(", "),
            self.iterations,
            self.converged
        );
    }
}
