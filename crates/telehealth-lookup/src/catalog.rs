//! Reference data keyed by disease or symptom name.

use std::collections::BTreeMap;

use telehealth_ingest::{Result, read_descriptions, read_precautions, read_severity_weights};
use telehealth_model::{DatasetLayout, SeverityLevel};

/// Descriptions, precautions and severity weights.
#[derive(Debug, Clone, Default)]
pub struct ReferenceCatalog {
    descriptions: BTreeMap<String, String>,
    precautions: BTreeMap<String, Vec<String>>,
    severity: BTreeMap<String, i64>,
}

impl ReferenceCatalog {
    pub fn new(
        descriptions: BTreeMap<String, String>,
        precautions: BTreeMap<String, Vec<String>>,
        severity: BTreeMap<String, i64>,
    ) -> Self {
        Self {
            descriptions,
            precautions,
            severity,
        }
    }

    /// Loads the three reference tables named by `layout`.
    ///
    /// Every table must exist; a missing file is reported, not skipped.
    pub fn load(layout: &DatasetLayout) -> Result<Self> {
        let catalog = Self::new(
            read_descriptions(&layout.descriptions_path())?,
            read_precautions(&layout.precautions_path())?,
            read_severity_weights(&layout.severity_path())?,
        );
        tracing::info!(
            root = %layout.root().display(),
            descriptions = catalog.descriptions.len(),
            precautions = catalog.precautions.len(),
            severity_weights = catalog.severity.len(),
            "Loaded reference catalog"
        );
        Ok(catalog)
    }

    pub fn description(&self, disease: &str) -> Option<&str> {
        self.descriptions.get(disease).map(String::as_str)
    }

    /// Precautions for `disease`; empty when none are recorded.
    pub fn precautions(&self, disease: &str) -> &[String] {
        self.precautions
            .get(disease)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Severity weight of `symptom`, if the severity table lists it.
    pub fn weight_of(&self, symptom: &str) -> Option<i64> {
        self.severity.get(symptom).copied()
    }

    /// Severity weight of `symptom`, 0 when unlisted.
    pub fn severity_weight(&self, symptom: &str) -> i64 {
        self.weight_of(symptom).unwrap_or(0)
    }

    pub fn severity(&self, symptom: &str) -> SeverityLevel {
        SeverityLevel::from_weight(self.severity_weight(symptom))
    }
}
