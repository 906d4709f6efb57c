//! Predictor - loaded artifact plus recommendation table
//!
//! A `Predictor` value only exists once an artifact loaded and verified,
//! so "unloaded" is simply the absence of one. It is never mutated after
//! construction apart from the table's fallback counter, and is shared
//! across threads behind an `Arc`.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::logic::features::{FeatureVector, ValidationError};
use crate::logic::model::pipeline::argmax;
use crate::logic::model::{ArtifactError, ModelArtifact};
use crate::logic::recommendations::{ConditionSeverity, Recommendation, RecommendationTable};
use crate::logic::risk::{self, RiskAssessment};

// ============================================================================
// DATA STRUCTURES
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub label: String,
    /// Max of `probabilities`
    pub confidence: f64,
    pub probabilities: BTreeMap<String, f64>,
}

/// Prediction with everything the dashboard shows next to it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub prediction: Prediction,
    pub severity: ConditionSeverity,
    pub advice: String,
    pub risk: RiskAssessment,
    pub recommendations: Recommendation,
}

/// Predictor status for the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictorStatus {
    pub model_loaded: bool,
    pub model_type: String,
    pub model_path: String,
    pub classes: Vec<String>,
    pub checksum: String,
    pub trained_at: DateTime<Utc>,
    pub loaded_at: DateTime<Utc>,
    pub fallback_events: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Classifier labels without recommendations: {}", join_labels(.labels))]
pub struct UnmappedLabelsError {
    pub labels: Vec<String>,
}

fn join_labels(labels: &[String]) -> String {
    labels.join(", ")
}

// ============================================================================
// PREDICTOR
// ============================================================================

#[derive(Debug)]
pub struct Predictor {
    artifact: ModelArtifact,
    recommendations: RecommendationTable,
    model_path: String,
    loaded_at: DateTime<Utc>,
}

impl Predictor {
    /// The only way to obtain a ready predictor from disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ArtifactError> {
        let path = path.as_ref();
        let artifact = ModelArtifact::load(path)?;
        Ok(Self::build(artifact, path.display().to_string()))
    }

    /// Wrap an in-memory artifact after re-verifying it
    pub fn from_artifact(artifact: ModelArtifact) -> Result<Self, ArtifactError> {
        artifact.verify()?;
        Ok(Self::build(artifact, "<memory>".to_string()))
    }

    fn build(artifact: ModelArtifact, model_path: String) -> Self {
        Self {
            artifact,
            recommendations: RecommendationTable::default(),
            model_path,
            loaded_at: Utc::now(),
        }
    }

    pub fn with_recommendations(mut self, table: RecommendationTable) -> Self {
        self.recommendations = table;
        self
    }

    pub fn artifact(&self) -> &ModelArtifact {
        &self.artifact
    }

    pub fn classes(&self) -> &[String] {
        self.artifact.pipeline.classes()
    }

    pub fn recommendations(&self) -> &RecommendationTable {
        &self.recommendations
    }

    /// Rejects out-of-domain input; never clamps
    pub fn predict(&self, features: &FeatureVector) -> Result<Prediction, ValidationError> {
        features.validate()?;

        let pipeline = &self.artifact.pipeline;
        let probs = pipeline.predict_proba(features);
        let best = argmax(&probs);

        let prediction = Prediction {
            label: pipeline.classes()[best].clone(),
            confidence: probs[best],
            probabilities: pipeline.classes().iter().cloned().zip(probs.iter().copied()).collect(),
        };

        log::debug!(
            "Predicted {} ({:.3}) for {}",
            prediction.label,
            prediction.confidence,
            features.to_log_entry()
        );
        Ok(prediction)
    }

    pub fn assess(&self, features: &FeatureVector) -> Result<Assessment, ValidationError> {
        let prediction = self.predict(features)?;
        let severity = ConditionSeverity::from_label(&prediction.label);
        let recommendations = self.recommendations.lookup(&prediction.label);

        Ok(Assessment {
            severity,
            advice: severity.advice().to_string(),
            risk: risk::assess(features),
            recommendations,
            prediction,
        })
    }

    pub fn recommend(&self, label: &str) -> Recommendation {
        self.recommendations.lookup(label)
    }

    pub fn unmapped_labels(&self) -> Vec<String> {
        self.recommendations.unmapped(self.classes())
    }

    /// Startup check of classifier labels against the table.
    /// `strict` turns unmapped labels into an error; otherwise they are
    /// logged and served through the fallback.
    pub fn check_labels(&self, strict: bool) -> Result<Vec<String>, UnmappedLabelsError> {
        let unmapped = self.unmapped_labels();
        if unmapped.is_empty() {
            log::info!("All {} classifier labels have recommendations", self.classes().len());
            return Ok(unmapped);
        }

        if strict {
            return Err(UnmappedLabelsError { labels: unmapped });
        }

        log::warn!(
            "Classifier labels without recommendations (will use fallback): {}",
            unmapped.join(", ")
        );
        Ok(unmapped)
    }

    pub fn status(&self) -> PredictorStatus {
        PredictorStatus {
            model_loaded: true,
            model_type: self.artifact.model_type.clone(),
            model_path: self.model_path.clone(),
            classes: self.classes().to_vec(),
            checksum: self.artifact.checksum.clone(),
            trained_at: self.artifact.trained_at,
            loaded_at: self.loaded_at,
            fallback_events: self.recommendations.fallback_events(),
        }
    }
}
