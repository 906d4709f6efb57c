//! Model Artifact - persisted, checksummed pipeline bundle
//!
//! JSON on disk. The checksum is SHA-256 over the serialized pipeline, so a
//! hand-edited coefficient or scaler value is caught at load time.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::logic::features::{LayoutInfo, LayoutMismatchError};
use crate::logic::training::TrainingReport;
use super::pipeline::Pipeline;

/// Bump when the artifact JSON shape changes
pub const ARTIFACT_FORMAT_VERSION: u32 = 1;

pub const MODEL_TYPE: &str = "Logistic Regression";

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("Model artifact not found: {0}")]
    NotFound(String),

    #[error("Artifact IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupt model artifact: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("Unsupported artifact format v{found} (expected v{expected})")]
    UnsupportedFormat { found: u32, expected: u32 },

    #[error("Artifact checksum mismatch: expected {expected}, computed {actual}")]
    ChecksumMismatch { expected: String, actual: String },

    #[error(transparent)]
    LayoutMismatch(#[from] LayoutMismatchError),

    #[error("Invalid model artifact: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub format_version: u32,
    pub model_type: String,
    pub layout: LayoutInfo,
    pub pipeline: Pipeline,
    pub report: TrainingReport,
    pub trained_at: DateTime<Utc>,
    pub checksum: String,
}

impl ModelArtifact {
    pub fn new(pipeline: Pipeline, report: TrainingReport) -> Result<Self, ArtifactError> {
        let checksum = pipeline_checksum(&pipeline)?;
        Ok(Self {
            format_version: ARTIFACT_FORMAT_VERSION,
            model_type: MODEL_TYPE.to_string(),
            layout: LayoutInfo::current(),
            pipeline,
            report,
            trained_at: Utc::now(),
            checksum,
        })
    }

    /// Write the artifact, replacing any previous one at `path`
    pub fn save(&self, path: &Path) -> Result<(), ArtifactError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_vec_pretty(self)?;
        fs::write(path, json)?;

        log::info!("Saved model artifact to {} (sha256 {})", path.display(), self.checksum);
        Ok(())
    }

    /// Read and verify format version, feature layout, shape and checksum
    pub fn load(path: &Path) -> Result<Self, ArtifactError> {
        if !path.exists() {
            return Err(ArtifactError::NotFound(path.display().to_string()));
        }

        let data = fs::read(path)?;
        let artifact: ModelArtifact = serde_json::from_slice(&data)?;
        artifact.verify()?;

        log::info!(
            "Loaded model artifact from {} ({} classes, trained {})",
            path.display(),
            artifact.pipeline.classes().len(),
            artifact.trained_at
        );
        Ok(artifact)
    }

    pub fn verify(&self) -> Result<(), ArtifactError> {
        if self.format_version != ARTIFACT_FORMAT_VERSION {
            return Err(ArtifactError::UnsupportedFormat {
                found: self.format_version,
                expected: ARTIFACT_FORMAT_VERSION,
            });
        }

        self.layout.validate()?;
        self.pipeline.check_shape().map_err(ArtifactError::Invalid)?;

        let actual = pipeline_checksum(&self.pipeline)?;
        if actual != self.checksum {
            return Err(ArtifactError::ChecksumMismatch {
                expected: self.checksum.clone(),
                actual,
            });
        }

        Ok(())
    }
}

/// Hex SHA-256 of the pipeline's compact JSON form
pub fn pipeline_checksum(pipeline: &Pipeline) -> Result<String, ArtifactError> {
    let bytes = serde_json::to_vec(pipeline)?;
    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    Ok(hex::encode(hasher.finalize()))
}
