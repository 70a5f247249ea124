//! Disease–symptom association records and the long table that holds them.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Column name of the disease field in a long table.
pub const DISEASE_NAME_COLUMN: &str = "disease_name";

/// Column name of the symptom field in a long table.
pub const SYMPTOM_NAME_COLUMN: &str = "symptom_name";

/// A single "this disease presents with this symptom" fact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AssociationRecord {
    pub disease_name: String,
    pub symptom_name: String,
}

impl AssociationRecord {
    pub fn new(disease_name: impl Into<String>, symptom_name: impl Into<String>) -> Self {
        Self {
            disease_name: disease_name.into(),
            symptom_name: symptom_name.into(),
        }
    }
}

/// Ordered sequence of association records (one row per present pair).
///
/// Consumers only rely on the content, not on the order; the order is kept so
/// that per-disease symptom lists come out in source column order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LongTable {
    records: Vec<AssociationRecord>,
}

impl LongTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, record: AssociationRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AssociationRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[AssociationRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<AssociationRecord> {
        self.records
    }

    /// Distinct disease names in first-seen order.
    pub fn diseases(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .map(|record| record.disease_name.as_str())
            .filter(|name| seen.insert(*name))
            .collect()
    }

    /// Returns true if the table holds the given pair at least once.
    pub fn contains(&self, disease: &str, symptom: &str) -> bool {
        self.records
            .iter()
            .any(|record| record.disease_name == disease && record.symptom_name == symptom)
    }
}

impl From<Vec<AssociationRecord>> for LongTable {
    fn from(records: Vec<AssociationRecord>) -> Self {
        Self { records }
    }
}

impl FromIterator<AssociationRecord> for LongTable {
    fn from_iter<I: IntoIterator<Item = AssociationRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for LongTable {
    type Item = AssociationRecord;
    type IntoIter = std::vec::IntoIter<AssociationRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a LongTable {
    type Item = &'a AssociationRecord;
    type IntoIter = std::slice::Iter<'a, AssociationRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
