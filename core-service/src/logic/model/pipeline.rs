//! Pipeline - scaler and classifier as one immutable value
//!
//! The only inference path is scale-then-classify. Neither stage can be
//! swapped or applied alone from outside the crate.

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::logic::dataset::Dataset;
use crate::logic::features::{FeatureVector, FEATURE_COUNT};
use super::logistic::{LogisticParams, LogisticRegression};
use super::metrics::accuracy;
use super::scaler::StandardScaler;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pipeline {
    scaler: StandardScaler,
    classifier: LogisticRegression,
}

impl Pipeline {
    /// Fit the scaler on `dataset`, then the classifier on the scaled rows.
    /// Classes are the dataset's sorted distinct labels.
    pub fn fit(dataset: &Dataset, params: &LogisticParams) -> Self {
        let rows = dataset.feature_rows();
        let flat: Vec<f64> = rows.iter().flatten().copied().collect();
        let x = Array2::from_shape_vec((rows.len(), FEATURE_COUNT), flat)
            .unwrap_or_else(|_| Array2::zeros((0, FEATURE_COUNT)));

        let classes = dataset.labels();
        let targets: Vec<usize> = dataset
            .diagnoses()
            .iter()
            .map(|d| classes.iter().position(|c| c == d).unwrap_or(0))
            .collect();

        let scaler = StandardScaler::fit(&x);
        let scaled = scaler.transform(&x);
        let classifier = LogisticRegression::fit(&scaled, &targets, classes, params);

        log::debug!(
            "Fitted pipeline on {} rows: {} classes, {} iterations, converged={}",
            rows.len(),
            classifier.classes().len(),
            classifier.n_iter(),
            classifier.converged()
        );

        Self { scaler, classifier }
    }

    pub fn scaler(&self) -> &StandardScaler {
        &self.scaler
    }

    pub fn classifier(&self) -> &LogisticRegression {
        &self.classifier
    }

    pub fn classes(&self) -> &[String] {
        self.classifier.classes()
    }

    /// Probability per class, in `classes()` order
    pub fn predict_proba(&self, features: &FeatureVector) -> Vec<f64> {
        let scaled = self.scaler.transform_row(&features.to_array());
        self.classifier.probabilities(&scaled)
    }

    /// Most probable class; ties go to the earlier class
    pub fn predict(&self, features: &FeatureVector) -> &str {
        let probs = self.predict_proba(features);
        let best = argmax(&probs);
        &self.classes()[best]
    }

    /// Fraction of records whose predicted class equals their label
    pub fn score(&self, dataset: &Dataset) -> f64 {
        let predicted: Vec<&str> = dataset.records().iter().map(|r| self.predict(&r.features)).collect();
        accuracy(&predicted, &dataset.diagnoses())
    }

    pub(crate) fn check_shape(&self) -> Result<(), String> {
        self.scaler.check_shape()?;
        self.classifier.check_shape()
    }
}

pub(crate) fn argmax(values: &[f64]) -> usize {
    let mut best = 0;
    for (i, v) in values.iter().enumerate() {
        if *v > values[best] {
            best = i;
        }
    }
    best
}
