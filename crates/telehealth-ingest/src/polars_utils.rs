//! Polars `AnyValue` helpers.

use polars::prelude::*;
use telehealth_model::PresenceSentinel;

/// Converts a Polars `AnyValue` to a `String` representation.
///
/// Returns an empty string for `Null`; integer-valued floats drop the
/// trailing `.0`.
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Int8(v) => v.to_string(),
        AnyValue::Int16(v) => v.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt8(v) => v.to_string(),
        AnyValue::UInt16(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) => format!("{}", f64::from(v)),
        AnyValue::Float64(v) => format!("{v}"),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Boolean(b) => b.to_string(),
        other => {
            let s = other.to_string();
            if s.starts_with('"') && s.ends_with('"') && s.len() >= 2 {
                s[1..s.len() - 1].to_string()
            } else {
                s
            }
        }
    }
}

fn any_to_integer(value: &AnyValue<'_>) -> Option<i64> {
    match value {
        AnyValue::Int8(v) => Some(i64::from(*v)),
        AnyValue::Int16(v) => Some(i64::from(*v)),
        AnyValue::Int32(v) => Some(i64::from(*v)),
        AnyValue::Int64(v) => Some(*v),
        AnyValue::UInt8(v) => Some(i64::from(*v)),
        AnyValue::UInt16(v) => Some(i64::from(*v)),
        AnyValue::UInt32(v) => Some(i64::from(*v)),
        AnyValue::UInt64(v) => i64::try_from(*v).ok(),
        _ => None,
    }
}

/// Returns true when a wide-table cell holds the presence sentinel.
///
/// Nulls never match. Integer, float, boolean and text cells are handed to
/// the matching comparison of the sentinel.
pub fn cell_is_present(value: &AnyValue<'_>, sentinel: &PresenceSentinel) -> bool {
    match value {
        AnyValue::Null => false,
        AnyValue::Boolean(b) => sentinel.matches_bool(*b),
        AnyValue::Float32(v) => sentinel.matches_float(f64::from(*v)),
        AnyValue::Float64(v) => sentinel.matches_float(*v),
        AnyValue::String(s) => sentinel.matches_text(s),
        AnyValue::StringOwned(s) => sentinel.matches_text(s.as_str()),
        other => match any_to_integer(other) {
            Some(v) => sentinel.matches_integer(v),
            None => sentinel.matches_text(&any_to_string(other.clone())),
        },
    }
}
