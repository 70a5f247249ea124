//! Bidirectional disease–symptom index.

use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use telehealth_ingest::Result;
use telehealth_model::LongTable;

use crate::knowledge::IndexSource;

/// In-memory disease→symptoms and symptom→diseases mappings.
///
/// Lists keep the order records were encountered in and are not
/// deduplicated. Lookups are exact and case-sensitive.
#[derive(Debug, Clone, Default)]
pub struct LookupIndex {
    disease_to_symptoms: HashMap<String, Vec<String>>,
    symptom_to_diseases: HashMap<String, Vec<String>>,
}

impl LookupIndex {
    /// Groups the table's records in both directions in a single pass.
    pub fn build(table: &LongTable) -> Self {
        let mut disease_to_symptoms: HashMap<String, Vec<String>> = HashMap::new();
        let mut symptom_to_diseases: HashMap<String, Vec<String>> = HashMap::new();

        for record in table {
            disease_to_symptoms
                .entry(record.disease_name.clone())
                .or_default()
                .push(record.symptom_name.clone());
            symptom_to_diseases
                .entry(record.symptom_name.clone())
                .or_default()
                .push(record.disease_name.clone());
        }

        tracing::debug!(
            diseases = disease_to_symptoms.len(),
            symptoms = symptom_to_diseases.len(),
            records = table.len(),
            "Built lookup index"
        );

        Self {
            disease_to_symptoms,
            symptom_to_diseases,
        }
    }

    /// Symptoms recorded for `disease`; empty when the disease is unknown.
    pub fn get_symptoms(&self, disease: &str) -> &[String] {
        self.disease_to_symptoms
            .get(disease)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Diseases recorded for `symptom`; empty when the symptom is unknown.
    pub fn get_diseases(&self, symptom: &str) -> &[String] {
        self.symptom_to_diseases
            .get(symptom)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Union of the diseases of every given symptom.
    ///
    /// Unknown symptoms contribute nothing; no symptoms gives an empty set.
    pub fn get_possible_diseases<I, S>(&self, symptoms: I) -> BTreeSet<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut possible = BTreeSet::new();
        for symptom in symptoms {
            possible.extend(self.get_diseases(symptom.as_ref()).iter().cloned());
        }
        possible
    }

    /// All disease names, sorted.
    pub fn diseases(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.disease_to_symptoms.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// All symptom names, sorted.
    pub fn symptoms(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.symptom_to_diseases.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Sorted disease names containing `query`, ignoring case.
    pub fn search_diseases(&self, query: &str) -> Vec<&str> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.diseases()
            .into_iter()
            .filter(|name| name.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn contains_disease(&self, disease: &str) -> bool {
        self.disease_to_symptoms.contains_key(disease)
    }

    pub fn disease_count(&self) -> usize {
        self.disease_to_symptoms.len()
    }

    pub fn symptom_count(&self) -> usize {
        self.symptom_to_diseases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.disease_to_symptoms.is_empty()
    }
}

/// Reads a long association file and builds an index from it.
///
/// # Errors
///
/// Fails when the file is missing or lacks the `disease_name` /
/// `symptom_name` columns.
pub fn load_index(path: &Path) -> Result<LookupIndex> {
    IndexSource::Associations.load_index(path)
}
