//! Data ingestion for the telehealth disease-symptom toolkit.
//!
//! This crate owns every file the toolkit touches:
//!
//! - **Reshaping**: convert a wide association table (one flag column per
//!   symptom) into a long table of disease–symptom pairs
//! - **Long tables**: read and write the two-column association file
//! - **Listing tables**: convert symptom-name listings into association records
//! - **Reference tables**: descriptions, precautions and severity weights
//! - **History**: the append-only lookup history log
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use telehealth_ingest::{default_long_path, reshape_file, write_long_table};
//! use telehealth_model::PresenceSentinel;
//!
//! let input = Path::new("dataset/Disease_Symptom_Associations.csv");
//! let table = reshape_file(input, "diseases", &PresenceSentinel::default())?;
//! write_long_table(&table, &default_long_path(input))?;
//! ```

mod error;
mod frame;
mod history;
mod listing;
mod long;
mod polars_utils;
mod reference;
mod reshape;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use frame::{column_strings, read_csv_frame, require_column};

// === Reshaping ===
pub use reshape::{LONG_TABLE_FILE_NAME, default_long_path, reshape, reshape_file};

// === Long Tables ===
pub use long::{read_long_table, write_long_table};

// === Listing Tables ===
pub use listing::{listing_to_long, read_listing_table};

// === Reference Tables ===
pub use reference::{
    DESCRIPTION_COLUMN, REFERENCE_DISEASE_COLUMN, SEVERITY_SYMPTOM_COLUMN,
    SEVERITY_WEIGHT_COLUMN, read_descriptions, read_precautions, read_severity_weights,
};

// === History ===
pub use history::{append_history, read_history};

// === Polars Helpers ===
pub use polars_utils::{any_to_string, cell_is_present};
