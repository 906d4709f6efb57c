//! Logic Module - training and inference engines
//!
//! ## Architecture
//! - `features/` - Feature layout and input validation (the artifact contract)
//! - `dataset/` - CSV loading, seeded split, summary
//! - `model/` - Scaler + logistic regression pipeline and its artifact
//! - `training/` - Cross-validation and the trainer
//! - `predictor/` - Loaded artifact serving predictions
//! - `risk/` - Rule-based health score, independent of the model
//! - `recommendations/` - Medicine suggestions per label

pub mod features;
pub mod dataset;
pub mod model;
pub mod training;

pub mod predictor;
pub mod risk;
pub mod recommendations;
