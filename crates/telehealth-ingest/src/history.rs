//! Append-only lookup history log.

use std::fs::OpenOptions;
use std::path::Path;

use telehealth_model::HistoryEntry;

use crate::error::{IngestError, Result};

const HISTORY_HEADER: [&str; 2] = ["disease", "symptom_count"];

/// Appends one entry to the history file.
///
/// A missing or empty file is created with a header row first; existing rows
/// are never rewritten.
pub fn append_history(path: &Path, entry: &HistoryEntry) -> Result<()> {
    let needs_header = !matches!(std::fs::metadata(path), Ok(meta) if meta.len() > 0);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| IngestError::FileWrite {
            path: path.to_path_buf(),
            source: e,
        })?;

    let csv_err = |source| IngestError::CsvWrite {
        path: path.to_path_buf(),
        source,
    };
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);
    if needs_header {
        writer.write_record(HISTORY_HEADER).map_err(csv_err)?;
    }
    writer.serialize(entry).map_err(csv_err)?;
    writer.flush().map_err(|e| IngestError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    tracing::debug!(
        path = %path.display(),
        disease = %entry.disease,
        symptom_count = entry.symptom_count,
        "Appended history entry"
    );
    Ok(())
}

/// Reads every history entry. A missing file means no history yet.
pub fn read_history(path: &Path) -> Result<Vec<HistoryEntry>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let csv_err = |source| IngestError::CsvRead {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(csv_err)?;

    let mut entries = Vec::new();
    for result in reader.deserialize::<HistoryEntry>() {
        entries.push(result.map_err(csv_err)?);
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_append_creates_header_once() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("history.csv");

        append_history(&path, &HistoryEntry::new("flu", 2)).unwrap();
        append_history(&path, &HistoryEntry::new("Common Cold", 5)).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "disease,symptom_count\nflu,2\nCommon Cold,5\n");
    }

    #[test]
    fn test_append_to_empty_file_writes_header() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("history.csv");
        std::fs::write(&path, "").unwrap();

        append_history(&path, &HistoryEntry::new("flu", 2)).unwrap();
        assert_eq!(
            read_history(&path).unwrap(),
            vec![HistoryEntry::new("flu", 2)]
        );
    }

    #[test]
    fn test_read_missing_history() {
        let dir = TempDir::new().unwrap();
        let entries = read_history(&dir.path().join("absent.csv")).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_read_invalid_count() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("history.csv");
        std::fs::write(&path, "disease,symptom_count\nflu,many\n").unwrap();
        assert!(matches!(
            read_history(&path),
            Err(IngestError::CsvRead { .. })
        ));
    }
}
