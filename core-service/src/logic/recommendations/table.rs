//! Recommendation Table - label → medicines with a documented fallback
//!
//! Unknown labels are not errors: they get the `FALLBACK_KEY` list, a
//! warning, a counter increment and a `LookupMiss` on the result.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use super::medicine::{default_entries, Medicine};

/// Entry served for labels the table does not know
pub const FALLBACK_KEY: &str = "Healthy";

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("Recommendation table has no '{0}' fallback entry")]
    MissingFallback(String),
}

/// Recorded when a label had no entry of its own
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupMiss {
    pub requested: String,
    pub served: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub label: String,
    pub medicines: Vec<Medicine>,
    pub fallback: Option<LookupMiss>,
}

impl Recommendation {
    pub fn is_fallback(&self) -> bool {
        self.fallback.is_some()
    }
}

#[derive(Debug)]
pub struct RecommendationTable {
    entries: BTreeMap<String, Vec<Medicine>>,
    fallback_events: AtomicU64,
}

impl RecommendationTable {
    /// Fails when the map has no `FALLBACK_KEY` entry
    pub fn new(entries: BTreeMap<String, Vec<Medicine>>) -> Result<Self, TableError> {
        if !entries.contains_key(FALLBACK_KEY) {
            return Err(TableError::MissingFallback(FALLBACK_KEY.to_string()));
        }
        Ok(Self {
            entries,
            fallback_events: AtomicU64::new(0),
        })
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.entries.contains_key(label)
    }

    pub fn lookup(&self, label: &str) -> Recommendation {
        if let Some(medicines) = self.entries.get(label) {
            return Recommendation {
                label: label.to_string(),
                medicines: medicines.clone(),
                fallback: None,
            };
        }

        let count = self.fallback_events.fetch_add(1, Ordering::Relaxed) + 1;
        log::warn!(
            "No recommendations for '{}', serving '{}' list (fallback #{})",
            label,
            FALLBACK_KEY,
            count
        );

        Recommendation {
            label: label.to_string(),
            medicines: self.fallback_medicines(),
            fallback: Some(LookupMiss {
                requested: label.to_string(),
                served: FALLBACK_KEY.to_string(),
            }),
        }
    }

    pub fn fallback_events(&self) -> u64 {
        self.fallback_events.load(Ordering::Relaxed)
    }

    /// Classifier labels that would hit the fallback, sorted
    pub fn unmapped<'a, I>(&self, labels: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a String>,
    {
        labels
            .into_iter()
            .filter(|l| !self.entries.contains_key(l.as_str()))
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    fn fallback_medicines(&self) -> Vec<Medicine> {
        self.entries.get(FALLBACK_KEY).cloned().unwrap_or_default()
    }
}

impl Default for RecommendationTable {
    fn default() -> Self {
        let entries = default_entries()
            .into_iter()
            .map(|(label, meds)| (label.to_string(), meds))
            .collect();
        Self {
            entries,
            fallback_events: AtomicU64::new(0),
        }
    }
}
