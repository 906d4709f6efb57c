use serde::{Deserialize, Serialize};
use crate::logic::features::FeatureVector;

/// One training row: features plus the diagnosis it was labelled with
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LabeledRecord {
    pub features: FeatureVector,
    pub diagnosis: String,
}

impl LabeledRecord {
    pub fn new(features: FeatureVector, diagnosis: impl Into<String>) -> Self {
        Self {
            features,
            diagnosis: diagnosis.into(),
        }
    }
}
