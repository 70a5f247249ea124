//! Symptom severity classification.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Weight at or above which a symptom is severe.
pub const SEVERE_THRESHOLD: i64 = 7;

/// Weight at or above which a symptom is moderate.
pub const MODERATE_THRESHOLD: i64 = 4;

/// Severity band derived from a symptom weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum SeverityLevel {
    #[default]
    Mild,
    Moderate,
    Severe,
}

impl SeverityLevel {
    /// Classifies a weight. Unknown symptoms are weighted 0 and land in `Mild`.
    pub const fn from_weight(weight: i64) -> Self {
        if weight >= SEVERE_THRESHOLD {
            Self::Severe
        } else if weight >= MODERATE_THRESHOLD {
            Self::Moderate
        } else {
            Self::Mild
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Mild => "Mild",
            Self::Moderate => "Moderate",
            Self::Severe => "Severe",
        }
    }

    pub const fn is_severe(&self) -> bool {
        matches!(self, Self::Severe)
    }
}

impl fmt::Display for SeverityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds() {
        assert_eq!(SeverityLevel::from_weight(0), SeverityLevel::Mild);
        assert_eq!(SeverityLevel::from_weight(3), SeverityLevel::Mild);
        assert_eq!(SeverityLevel::from_weight(4), SeverityLevel::Moderate);
        assert_eq!(SeverityLevel::from_weight(6), SeverityLevel::Moderate);
        assert_eq!(SeverityLevel::from_weight(7), SeverityLevel::Severe);
        assert_eq!(SeverityLevel::from_weight(12), SeverityLevel::Severe);
        assert_eq!(SeverityLevel::from_weight(-1), SeverityLevel::Mild);
    }

    #[test]
    fn test_ordering() {
        assert!(SeverityLevel::Severe > SeverityLevel::Moderate);
        assert!(SeverityLevel::Moderate > SeverityLevel::Mild);
    }
}
