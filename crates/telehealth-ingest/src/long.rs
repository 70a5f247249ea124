//! Reading and writing the two-column long association table.

use std::path::Path;

use telehealth_model::{AssociationRecord, DISEASE_NAME_COLUMN, LongTable, SYMPTOM_NAME_COLUMN};

use crate::error::{IngestError, Result};
use crate::frame::{column_strings, read_csv_frame, require_column};

/// Reads a long table with `disease_name` and `symptom_name` columns.
///
/// Extra columns are ignored. Rows missing either value are skipped.
pub fn read_long_table(path: &Path) -> Result<LongTable> {
    let df = read_csv_frame(path)?;
    let diseases =
        column_strings(require_column(&df, DISEASE_NAME_COLUMN).map_err(|e| e.with_path(path))?)?;
    let symptoms =
        column_strings(require_column(&df, SYMPTOM_NAME_COLUMN).map_err(|e| e.with_path(path))?)?;

    let mut table = LongTable::with_capacity(diseases.len());
    let mut skipped = 0usize;
    for (disease, symptom) in diseases.into_iter().zip(symptoms) {
        match (disease, symptom) {
            (Some(disease), Some(symptom)) => {
                table.push(AssociationRecord::new(disease, symptom));
            }
            _ => skipped += 1,
        }
    }
    if skipped > 0 {
        tracing::warn!(path = %path.display(), skipped, "Skipping incomplete association rows");
    }

    tracing::info!(path = %path.display(), pairs = table.len(), "Loaded long association table");
    Ok(table)
}

/// Writes a long table as `disease_name,symptom_name` CSV, header included.
pub fn write_long_table(table: &LongTable, path: &Path) -> Result<()> {
    let csv_err = |source| IngestError::CsvWrite {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(csv_err)?;
    writer
        .write_record([DISEASE_NAME_COLUMN, SYMPTOM_NAME_COLUMN])
        .map_err(csv_err)?;
    for record in table {
        writer.serialize(record).map_err(csv_err)?;
    }
    writer.flush().map_err(|e| IngestError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    tracing::info!(path = %path.display(), pairs = table.len(), "Wrote long association table");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_then_read() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("long.csv");
        let table: LongTable = vec![
            AssociationRecord::new("flu", "fever"),
            AssociationRecord::new("common cold", "runny, nose"),
        ]
        .into();

        write_long_table(&table, &path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("disease_name,symptom_name\n"));
        assert!(content.contains("\"runny, nose\""));

        assert_eq!(read_long_table(&path).unwrap(), table);
    }

    #[test]
    fn test_write_empty_table_keeps_header() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("long.csv");
        write_long_table(&LongTable::new(), &path).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "disease_name,symptom_name\n"
        );
    }

    #[test]
    fn test_read_misnamed_columns() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("long.csv");
        std::fs::write(&path, "disease,symptom\nflu,fever\n").unwrap();

        let err = read_long_table(&path).unwrap_err();
        assert!(
            matches!(err, IngestError::MissingColumn { ref column, .. } if column == "disease_name")
        );
    }

    #[test]
    fn test_read_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = read_long_table(&dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, IngestError::FileNotFound { .. }));
    }
}
