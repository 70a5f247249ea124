//! Core data types for the telehealth disease-symptom toolkit.
//!
//! This crate holds plain values only. Reading and writing files lives in
//! `telehealth-ingest`; building and querying the lookup index lives in
//! `telehealth-lookup`.

pub mod association;
pub mod history;
pub mod layout;
pub mod profile;
pub mod sentinel;
pub mod severity;

pub use association::{
    AssociationRecord, DISEASE_NAME_COLUMN, LongTable, SYMPTOM_NAME_COLUMN,
};
pub use history::{HistoryEntry, HistorySummary};
pub use layout::{
    DEFAULT_DATA_DIR, DEFAULT_IDENTIFIER_COLUMN, DEFAULT_REFERENCE_DIR, DatasetLayout,
};
pub use profile::{DiseaseProfile, NO_DESCRIPTION, SymptomSeverity};
pub use sentinel::{ParseSentinelError, PresenceSentinel};
pub use severity::SeverityLevel;
