//! Reference tables keyed by disease or symptom name.

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{IngestError, Result};
use crate::frame::{column_strings, read_csv_frame, require_column};

/// Identifier column of the description and precaution tables.
pub const REFERENCE_DISEASE_COLUMN: &str = "Disease";

/// Text column of the description table.
pub const DESCRIPTION_COLUMN: &str = "Description";

/// Identifier column of the severity table.
pub const SEVERITY_SYMPTOM_COLUMN: &str = "Symptom";

/// Weight column of the severity table.
pub const SEVERITY_WEIGHT_COLUMN: &str = "weight";

/// Reads `Disease,Description` rows. The first row per disease wins.
pub fn read_descriptions(path: &Path) -> Result<BTreeMap<String, String>> {
    let df = read_csv_frame(path)?;
    let diseases = column_strings(
        require_column(&df, REFERENCE_DISEASE_COLUMN).map_err(|e| e.with_path(path))?,
    )?;
    let descriptions =
        column_strings(require_column(&df, DESCRIPTION_COLUMN).map_err(|e| e.with_path(path))?)?;

    let mut map = BTreeMap::new();
    for (disease, description) in diseases.into_iter().zip(descriptions) {
        if let (Some(disease), Some(description)) = (disease, description) {
            map.entry(disease).or_insert(description);
        }
    }
    tracing::debug!(path = %path.display(), diseases = map.len(), "Loaded descriptions");
    Ok(map)
}

/// Reads a `Disease` column followed by any number of precaution columns.
///
/// Non-blank precautions are kept in column order. The first row per disease wins.
pub fn read_precautions(path: &Path) -> Result<BTreeMap<String, Vec<String>>> {
    let df = read_csv_frame(path)?;
    let diseases = column_strings(
        require_column(&df, REFERENCE_DISEASE_COLUMN).map_err(|e| e.with_path(path))?,
    )?;
    let precaution_columns = df
        .get_columns()
        .iter()
        .filter(|col| col.name().as_str() != REFERENCE_DISEASE_COLUMN)
        .map(column_strings)
        .collect::<Result<Vec<_>>>()?;

    let mut map = BTreeMap::new();
    for (row, disease) in diseases.into_iter().enumerate() {
        let Some(disease) = disease else {
            continue;
        };
        let precautions: Vec<String> = precaution_columns
            .iter()
            .filter_map(|values| values[row].clone())
            .collect();
        map.entry(disease).or_insert(precautions);
    }
    tracing::debug!(path = %path.display(), diseases = map.len(), "Loaded precautions");
    Ok(map)
}

/// Parses an integer weight, accepting integer-valued decimals like `3.0`.
fn parse_weight(raw: &str) -> Option<i64> {
    if let Ok(value) = raw.parse::<i64>() {
        return Some(value);
    }
    raw.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && value.fract() == 0.0)
        .map(|value| value as i64)
}

/// Reads `Symptom,weight` rows. The first row per symptom wins.
///
/// # Errors
///
/// Returns [`IngestError::InvalidValue`] when a weight is not an integer.
pub fn read_severity_weights(path: &Path) -> Result<BTreeMap<String, i64>> {
    let df = read_csv_frame(path)?;
    let symptoms = column_strings(
        require_column(&df, SEVERITY_SYMPTOM_COLUMN).map_err(|e| e.with_path(path))?,
    )?;
    let weights = column_strings(
        require_column(&df, SEVERITY_WEIGHT_COLUMN).map_err(|e| e.with_path(path))?,
    )?;

    let mut map = BTreeMap::new();
    for (symptom, weight) in symptoms.into_iter().zip(weights) {
        let (Some(symptom), Some(weight)) = (symptom, weight) else {
            continue;
        };
        let value = parse_weight(&weight).ok_or_else(|| IngestError::InvalidValue {
            field: SEVERITY_WEIGHT_COLUMN.to_string(),
            value: weight.clone(),
            path: path.to_path_buf(),
        })?;
        map.entry(symptom).or_insert(value);
    }
    tracing::debug!(path = %path.display(), symptoms = map.len(), "Loaded severity weights");
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_read_descriptions_first_row_wins() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "desc.csv",
            "Disease,Description\nflu,Viral infection\nflu,Duplicate\nacne,\"Skin, mostly\"\n",
        );
        let map = read_descriptions(&path).unwrap();
        assert_eq!(map.get("flu").map(String::as_str), Some("Viral infection"));
        assert_eq!(map.get("acne").map(String::as_str), Some("Skin, mostly"));
    }

    #[test]
    fn test_read_precautions_skips_blanks() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "prec.csv",
            "Disease,Precaution_1,Precaution_2,Precaution_3\nflu,rest,,drink fluids\nacne,wash face,avoid oil,\n",
        );
        let map = read_precautions(&path).unwrap();
        assert_eq!(map["flu"], vec!["rest", "drink fluids"]);
        assert_eq!(map["acne"], vec!["wash face", "avoid oil"]);
    }

    #[test]
    fn test_read_severity_weights() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "sev.csv", "Symptom,weight\nitching,1\nchest_pain,7\n");
        let map = read_severity_weights(&path).unwrap();
        assert_eq!(map["itching"], 1);
        assert_eq!(map["chest_pain"], 7);
    }

    #[test]
    fn test_read_severity_weights_invalid() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "sev.csv", "Symptom,weight\nitching,high\n");
        let err = read_severity_weights(&path).unwrap_err();
        assert!(matches!(err, IngestError::InvalidValue { ref value, .. } if value == "high"));
    }

    #[test]
    fn test_parse_weight() {
        assert_eq!(parse_weight("3"), Some(3));
        assert_eq!(parse_weight("3.0"), Some(3));
        assert_eq!(parse_weight("3.5"), None);
        assert_eq!(parse_weight("NaN"), None);
    }

    #[test]
    fn test_missing_description_column() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "desc.csv", "Disease,Text\nflu,x\n");
        let err = read_descriptions(&path).unwrap_err();
        assert!(matches!(err, IngestError::MissingColumn { ref column, .. } if column == "Description"));
    }
}
