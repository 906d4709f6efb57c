//! Stratified k-fold cross-validation
//!
//! No shuffling: within each class (labels in sorted order) the i-th member
//! goes to fold `(offset + i) % k`, where `offset` is the number of records
//! in earlier classes. Same dataset gives the same folds and scores.

use crate::logic::dataset::Dataset;
use crate::logic::model::metrics::mean_std;
use crate::logic::model::{LogisticParams, Pipeline};
use super::report::CrossValidation;
use super::TrainingError;

pub const DEFAULT_FOLDS: usize = 5;

/// Every class needs at least this many members to appear in two folds
pub const MIN_CLASS_MEMBERS: usize = 2;

/// Fold number for every record of a dataset
#[derive(Debug, Clone, PartialEq)]
pub struct FoldPlan {
    pub requested: usize,
    pub used: usize,
    assignment: Vec<usize>,
}

impl FoldPlan {
    pub fn assignment(&self) -> &[usize] {
        &self.assignment
    }

    /// (train indices, test indices) of one fold
    pub fn split(&self, fold: usize) -> (Vec<usize>, Vec<usize>) {
        let mut train = Vec::new();
        let mut test = Vec::new();
        for (idx, &f) in self.assignment.iter().enumerate() {
            if f == fold {
                test.push(idx);
            } else {
                train.push(idx);
            }
        }
        (train, test)
    }
}

/// Assign folds. When the smallest class is smaller than `requested`, the
/// fold count drops to that class size and a warning is logged.
pub fn plan_folds(dataset: &Dataset, requested: usize) -> Result<FoldPlan, TrainingError> {
    if requested < 2 {
        return Err(TrainingError::InvalidConfig(format!(
            "cross-validation needs at least 2 folds, got {}",
            requested
        )));
    }

    let counts = dataset.class_counts();
    if counts.len() < 2 {
        let label = counts.keys().next().cloned().unwrap_or_default();
        return Err(TrainingError::SingleClass(label));
    }

    let (min_label, &min_count) = counts
        .iter()
        .min_by_key(|(_, count)| **count)
        .ok_or_else(|| TrainingError::InvalidConfig("empty training partition".to_string()))?;

    if min_count < MIN_CLASS_MEMBERS {
        return Err(TrainingError::InsufficientClassMembers {
            label: min_label.clone(),
            count: min_count,
            required: MIN_CLASS_MEMBERS,
        });
    }

    let used = requested.min(min_count);
    if used < requested {
        log::warn!(
            "Smallest class '{}' has {} members; reducing cross-validation folds from {} to {}",
            min_label,
            min_count,
            requested,
            used
        );
    }

    let mut assignment = vec![0usize; dataset.len()];
    let mut offset = 0;
    for label in counts.keys() {
        let members = dataset
            .records()
            .iter()
            .enumerate()
            .filter(|(_, r)| &r.diagnosis == label)
            .map(|(idx, _)| idx);

        let mut taken = 0;
        for (i, idx) in members.enumerate() {
            assignment[idx] = (offset + i) % used;
            taken += 1;
        }
        offset += taken;
    }

    Ok(FoldPlan {
        requested,
        used,
        assignment,
    })
}

/// Fit a fresh pipeline per fold and score it on the held-back fold
pub fn cross_validate(
    dataset: &Dataset,
    requested_folds: usize,
    params: &LogisticParams,
) -> Result<CrossValidation, TrainingError> {
    let plan = plan_folds(dataset, requested_folds)?;
    let mut fold_scores = Vec::with_capacity(plan.used);

    for fold in 0..plan.used {
        let (train_idx, test_idx) = plan.split(fold);
        let train = dataset.subset(&train_idx);
        let test = dataset.subset(&test_idx);

        let pipeline = Pipeline::fit(&train, params);
        let score = pipeline.score(&test);
        log::info!(
            "Fold {}/{}: accuracy {:.3} ({} train / {} test)",
            fold + 1,
            plan.used,
            score,
            train.len(),
            test.len()
        );
        fold_scores.push(score);
    }

    let (mean_accuracy, std_accuracy) = mean_std(&fold_scores);

    Ok(CrossValidation {
        requested_folds: plan.requested,
        folds_used: plan.used,
        fold_scores,
        mean_accuracy,
        std_accuracy,
    })
}
