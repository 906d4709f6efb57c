//! Predictor Module - serving side of the artifact contract

pub mod engine;


pub use engine::{Assessment, Prediction, Predictor, PredictorStatus, UnmappedLabelsError};
