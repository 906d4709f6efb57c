//! Model Module - scaler + classifier pipeline and its artifact
//!
//! `Pipeline` bundles the two fitted stages; `ModelArtifact` is what the
//! trainer writes and the predictor reads.

pub mod artifact;
pub mod logistic;
pub mod metrics;
pub mod pipeline;
pub mod scaler;


// Re-export common types
pub use artifact::{pipeline_checksum, ArtifactError, ModelArtifact, ARTIFACT_FORMAT_VERSION, MODEL_TYPE};
pub use logistic::{LogisticParams, LogisticRegression};
pub use pipeline::Pipeline;
pub use scaler::StandardScaler;
