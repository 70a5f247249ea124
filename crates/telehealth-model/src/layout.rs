//! File layout of a dataset directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Default dataset directory, relative to the working directory.
pub const DEFAULT_DATA_DIR: &str = "dataset";

/// Default subdirectory of the data directory holding the Kaggle listing and
/// reference tables.
pub const DEFAULT_REFERENCE_DIR: &str = "Disease symptom prediction";

/// Default identifier column of the wide association table.
pub const DEFAULT_IDENTIFIER_COLUMN: &str = "diseases";

/// Names of every file the toolkit reads or writes.
///
/// Association and history files live directly under `root`; the listing and
/// reference tables live under `root/reference_dir`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetLayout {
    pub root: PathBuf,
    /// Reference subdirectory, relative to `root` unless absolute.
    pub reference_dir: PathBuf,
    /// Wide association table (one flag column per symptom).
    pub wide: String,
    /// Long association table produced by the reshaper.
    pub associations: String,
    /// Listing table (symptom names as cell values).
    pub listing: String,
    pub descriptions: String,
    pub precautions: String,
    pub severity: String,
    pub history: String,
}

impl Default for DatasetLayout {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_DIR)
    }
}

impl DatasetLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            reference_dir: PathBuf::from(DEFAULT_REFERENCE_DIR),
            wide: "Disease_Symptom_Associations.csv".to_string(),
            associations: "preprocessed_dataset.csv".to_string(),
            listing: "dataset.csv".to_string(),
            descriptions: "symptom_Description.csv".to_string(),
            precautions: "symptom_precaution.csv".to_string(),
            severity: "Symptom-severity.csv".to_string(),
            history: "patient_history.csv".to_string(),
        }
    }

    pub fn with_reference_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.reference_dir = dir.into();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding the listing and reference tables.
    pub fn reference_root(&self) -> PathBuf {
        self.root.join(&self.reference_dir)
    }

    pub fn wide_path(&self) -> PathBuf {
        self.root.join(&self.wide)
    }

    pub fn associations_path(&self) -> PathBuf {
        self.root.join(&self.associations)
    }

    pub fn listing_path(&self) -> PathBuf {
        self.reference_root().join(&self.listing)
    }

    pub fn descriptions_path(&self) -> PathBuf {
        self.reference_root().join(&self.descriptions)
    }

    pub fn precautions_path(&self) -> PathBuf {
        self.reference_root().join(&self.precautions)
    }

    pub fn severity_path(&self) -> PathBuf {
        self.reference_root().join(&self.severity)
    }

    pub fn history_path(&self) -> PathBuf {
        self.root.join(&self.history)
    }
}
