//! Features Module - Feature contract shared by trainer and predictor
//!
//! `layout` pins names, order and version; `vector` holds one record and
//! its domain validation.

pub mod layout;
pub mod vector;


pub use layout::{FEATURE_COUNT, FEATURE_LAYOUT, FEATURE_VERSION, LABEL_COLUMN, LayoutInfo, LayoutMismatchError};
pub use vector::{FeatureDomain, FeatureVector, FieldViolation, ValidationError, FEATURE_DOMAINS};
