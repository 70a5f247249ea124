//! Disease profile assembled from the lookup index and the reference tables.

use serde::{Deserialize, Serialize};

use crate::severity::SeverityLevel;

/// Description shown when the reference table has no entry for a disease.
pub const NO_DESCRIPTION: &str = "No description available.";

/// A symptom together with its severity weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomSeverity {
    pub symptom: String,
    /// Weight from the severity table, `None` when the symptom is not listed.
    pub weight: Option<i64>,
    pub level: SeverityLevel,
}

impl SymptomSeverity {
    pub fn new(symptom: impl Into<String>, weight: Option<i64>) -> Self {
        Self {
            symptom: symptom.into(),
            weight,
            level: SeverityLevel::from_weight(weight.unwrap_or(0)),
        }
    }
}

/// Everything known about one disease.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiseaseProfile {
    pub disease: String,
    pub symptoms: Vec<SymptomSeverity>,
    pub description: Option<String>,
    pub precautions: Vec<String>,
}

impl DiseaseProfile {
    /// Description text, falling back to [`NO_DESCRIPTION`].
    pub fn description_or_default(&self) -> &str {
        self.description.as_deref().unwrap_or(NO_DESCRIPTION)
    }

    /// True when at least one symptom is severe.
    pub fn requires_urgent_care(&self) -> bool {
        self.symptoms.iter().any(|s| s.level.is_severe())
    }

    pub fn symptom_count(&self) -> usize {
        self.symptoms.len()
    }

    /// True when nothing at all is known about the disease.
    pub fn is_unknown(&self) -> bool {
        self.symptoms.is_empty() && self.description.is_none() && self.precautions.is_empty()
    }
}
