//! Wide-to-long reshaping of disease–symptom association tables.
//!
//! A wide table has one identifier column (the disease) and one flag column
//! per symptom. Reshaping emits one [`AssociationRecord`] per cell holding the
//! presence sentinel and drops everything else, nulls included.

use std::path::{Path, PathBuf};

use polars::prelude::*;
use telehealth_model::{AssociationRecord, LongTable, PresenceSentinel};

use crate::error::Result;
use crate::frame::{column_strings, read_csv_frame, require_column};
use crate::polars_utils::cell_is_present;

/// File name of the long table written next to the wide input.
pub const LONG_TABLE_FILE_NAME: &str = "preprocessed_dataset.csv";

/// Reshapes a wide table into a long table.
///
/// Records are emitted column by column, so every disease's symptoms come out
/// in the wide table's column order. Rows with a null or blank identifier are
/// skipped.
///
/// # Errors
///
/// Returns [`IngestError::ColumnNotFound`](crate::IngestError::ColumnNotFound)
/// when `identifier_column` is absent.
pub fn reshape(
    wide: &DataFrame,
    identifier_column: &str,
    sentinel: &PresenceSentinel,
) -> Result<LongTable> {
    let identifiers = column_strings(require_column(wide, identifier_column)?)?;

    let skipped = identifiers.iter().filter(|id| id.is_none()).count();
    if skipped > 0 {
        tracing::warn!(
            column = identifier_column,
            skipped,
            "Skipping rows without an identifier"
        );
    }

    let mut table = LongTable::new();
    for col in wide.get_columns() {
        let symptom = col.name().as_str();
        if symptom == identifier_column {
            continue;
        }
        let series = col.as_materialized_series();
        for (row, identifier) in identifiers.iter().enumerate() {
            let Some(disease) = identifier else {
                continue;
            };
            if cell_is_present(&series.get(row)?, sentinel) {
                table.push(AssociationRecord::new(disease.as_str(), symptom));
            }
        }
    }

    Ok(table)
}

/// Reads a wide CSV file and reshapes it.
///
/// # Errors
///
/// - [`IngestError::FileNotFound`](crate::IngestError::FileNotFound) if `input` does not exist
/// - [`IngestError::MissingColumn`](crate::IngestError::MissingColumn) if the identifier column is absent
pub fn reshape_file(
    input: &Path,
    identifier_column: &str,
    sentinel: &PresenceSentinel,
) -> Result<LongTable> {
    let wide = read_csv_frame(input)?;
    let table = reshape(&wide, identifier_column, sentinel).map_err(|e| e.with_path(input))?;

    tracing::info!(
        path = %input.display(),
        rows = wide.height(),
        symptom_columns = wide.width().saturating_sub(1),
        pairs = table.len(),
        sentinel = %sentinel,
        "Reshaped wide association table"
    );

    Ok(table)
}

/// Path of the long table derived from a wide input path.
pub fn default_long_path(input: &Path) -> PathBuf {
    input
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join(LONG_TABLE_FILE_NAME)
}
