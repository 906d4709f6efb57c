//! Recommendations Module - medicine suggestions per predicted label
//!
//! Display data for the presentation layer. Severity and medicines are
//! looked up by label; nothing here affects the classifier.

pub mod medicine;
pub mod severity;
pub mod table;

#[cfg(test)]
mod tests;

pub use medicine::Medicine;
pub use severity::ConditionSeverity;
pub use table::{LookupMiss, Recommendation, RecommendationTable, TableError, FALLBACK_KEY};
