//! Dataset Module - Labelled vital-sign records for training
//!
//! CSV loading, seeded train/test partitioning and the class distribution
//! summary shown next to predictions.

pub mod loader;
pub mod record;
pub mod split;

#[cfg(test)]
mod tests;

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::logic::features::FEATURE_COUNT;
pub use loader::{from_reader, load_csv, DataError};
pub use record::LabeledRecord;

/// Non-empty collection of labelled records
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: Vec<LabeledRecord>,
}

impl Dataset {
    pub fn new(records: Vec<LabeledRecord>) -> Result<Self, DataError> {
        if records.is_empty() {
            return Err(DataError::Empty);
        }
        Ok(Self { records })
    }

    /// Rows picked by index, in the given order
    pub(crate) fn subset(&self, indices: &[usize]) -> Self {
        Self {
            records: indices.iter().map(|&i| self.records[i].clone()).collect(),
        }
    }

    pub fn records(&self) -> &[LabeledRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Feature rows in layout order
    pub fn feature_rows(&self) -> Vec<[f64; FEATURE_COUNT]> {
        self.records.iter().map(|r| r.features.to_array()).collect()
    }

    pub fn diagnoses(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.diagnosis.as_str()).collect()
    }

    /// Distinct labels, sorted
    pub fn labels(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|r| r.diagnosis.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn class_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for record in &self.records {
            *counts.entry(record.diagnosis.clone()).or_insert(0) += 1;
        }
        counts
    }

    pub fn summary(&self) -> DatasetSummary {
        DatasetSummary::from_counts(self.class_counts())
    }
}

// ============================================================================
// SUMMARY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassShare {
    pub label: String,
    pub count: usize,
    pub fraction: f64,
}

/// Diagnosis distribution of a dataset, most frequent first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub total_samples: usize,
    pub distribution: Vec<ClassShare>,
}

impl DatasetSummary {
    fn from_counts(counts: BTreeMap<String, usize>) -> Self {
        let total_samples: usize = counts.values().sum();

        let mut distribution: Vec<ClassShare> = counts
            .into_iter()
            .map(|(label, count)| ClassShare {
                fraction: if total_samples > 0 { count as f64 / total_samples as f64 } else { 0.0 },
                label,
                count,
            })
            .collect();
        distribution.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));

        Self {
            total_samples,
            distribution,
        }
    }
}
