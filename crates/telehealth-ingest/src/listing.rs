//! Listing tables: symptom names stored as cell values.
//!
//! A listing has an identifier column followed by `Symptom_1..Symptom_N`
//! columns whose cells hold symptom names. A disease usually appears on many
//! rows with overlapping symptoms.

use std::collections::HashSet;
use std::path::Path;

use polars::prelude::*;
use telehealth_model::{AssociationRecord, LongTable};

use crate::error::Result;
use crate::frame::{column_strings, read_csv_frame, require_column};

/// Converts a listing into association records.
///
/// Rows are walked in order and cells left to right; each non-blank cell
/// yields a `(disease, symptom)` record unless that pair was already emitted.
pub fn listing_to_long(listing: &DataFrame, identifier_column: &str) -> Result<LongTable> {
    let identifiers = column_strings(require_column(listing, identifier_column)?)?;
    let value_columns = listing
        .get_columns()
        .iter()
        .filter(|col| col.name().as_str() != identifier_column)
        .map(column_strings)
        .collect::<Result<Vec<_>>>()?;

    let mut seen: HashSet<(String, String)> = HashSet::new();
    let mut table = LongTable::new();
    for (row, identifier) in identifiers.iter().enumerate() {
        let Some(disease) = identifier else {
            continue;
        };
        for values in &value_columns {
            let Some(symptom) = &values[row] else {
                continue;
            };
            if seen.insert((disease.clone(), symptom.clone())) {
                table.push(AssociationRecord::new(disease.as_str(), symptom.as_str()));
            }
        }
    }

    Ok(table)
}

/// Reads a listing CSV file and converts it into association records.
pub fn read_listing_table(path: &Path, identifier_column: &str) -> Result<LongTable> {
    let listing = read_csv_frame(path)?;
    let table = listing_to_long(&listing, identifier_column).map_err(|e| e.with_path(path))?;
    tracing::info!(
        path = %path.display(),
        rows = listing.height(),
        pairs = table.len(),
        "Loaded symptom listing"
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_deduplicates_pairs() {
        let df = DataFrame::new(vec![
            Column::new(
                "Disease".into(),
                vec!["Fungal infection", "Fungal infection", "Acne"],
            ),
            Column::new(
                "Symptom_1".into(),
                vec![" itching", "skin_rash", "pus_filled_pimples"],
            ),
            Column::new(
                "Symptom_2".into(),
                vec![Some(" skin_rash"), Some("itching"), None],
            ),
        ])
        .unwrap();

        let table = listing_to_long(&df, "Disease").unwrap();
        assert_eq!(
            table.records(),
            &[
                AssociationRecord::new("Fungal infection", "itching"),
                AssociationRecord::new("Fungal infection", "skin_rash"),
                AssociationRecord::new("Acne", "pus_filled_pimples"),
            ]
        );
    }

    #[test]
    fn test_listing_missing_identifier() {
        let df = DataFrame::new(vec![Column::new("Symptom_1".into(), vec!["itching"])]).unwrap();
        let err = listing_to_long(&df, "Disease").unwrap_err();
        assert!(err.is_schema_error());
    }
}
