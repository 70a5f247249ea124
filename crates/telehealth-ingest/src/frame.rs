//! CSV loading into Polars DataFrames.

use std::path::Path;

use polars::prelude::*;

use crate::error::{IngestError, Result};

/// Fails with [`IngestError::FileNotFound`] unless `path` is a readable file.
pub(crate) fn ensure_file(path: &Path) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    if !metadata.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

/// Trims whitespace and a leading UTF-8 BOM from a header.
fn normalize_header(raw: &str) -> String {
    raw.trim_start_matches('\u{feff}').trim().to_string()
}

/// Reads a CSV file with a single header row into a DataFrame.
///
/// Header names are trimmed; cell values keep their inferred types. Types are
/// inferred from every row, so a sparse flag column whose first value shows up
/// late, or whose encoding widens from `0` to `1.0`, still reads as numeric.
pub fn read_csv_frame(path: &Path) -> Result<DataFrame> {
    ensure_file(path)?;

    let mut df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(None)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let original: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    let normalized: Vec<String> = original.iter().map(|name| normalize_header(name)).collect();
    if normalized != original {
        df.set_column_names(normalized.iter().map(String::as_str))?;
    }

    tracing::debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "Loaded CSV"
    );

    Ok(df)
}

/// Looks up a column by exact name.
pub fn require_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column> {
    df.column(name).map_err(|_| IngestError::ColumnNotFound {
        column: name.to_string(),
    })
}

/// Returns the column's values as trimmed strings, `None` for nulls and blanks.
pub fn column_strings(col: &Column) -> Result<Vec<Option<String>>> {
    let series = col.cast(&DataType::String)?.take_materialized_series();
    let values = series
        .str()?
        .iter()
        .map(|value| {
            value
                .map(str::trim)
                .filter(|trimmed| !trimmed.is_empty())
                .map(str::to_string)
        })
        .collect();
    Ok(values)
}
