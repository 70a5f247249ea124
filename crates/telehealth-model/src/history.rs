//! Lookup history entries and their per-disease summary.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One saved lookup. Field names double as the history file's CSV header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub disease: String,
    pub symptom_count: usize,
}

impl HistoryEntry {
    pub fn new(disease: impl Into<String>, symptom_count: usize) -> Self {
        Self {
            disease: disease.into(),
            symptom_count,
        }
    }
}

/// Lookup counts per disease, most frequent first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistorySummary {
    pub counts: Vec<(String, usize)>,
    pub total: usize,
}

impl HistorySummary {
    pub fn from_entries(entries: &[HistoryEntry]) -> Self {
        let mut by_disease: HashMap<&str, usize> = HashMap::new();
        for entry in entries {
            *by_disease.entry(entry.disease.as_str()).or_insert(0) += 1;
        }
        let mut counts: Vec<(String, usize)> = by_disease
            .into_iter()
            .map(|(disease, count)| (disease.to_string(), count))
            .collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        Self {
            counts,
            total: entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn count_for(&self, disease: &str) -> usize {
        self.counts
            .iter()
            .find(|(name, _)| name == disease)
            .map_or(0, |(_, count)| *count)
    }
}
