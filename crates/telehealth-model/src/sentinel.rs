//! Presence sentinel: decides whether a wide-table cell means "present".

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Text values accepted by [`PresenceSentinel::Truthy`] (compared case-insensitively).
const TRUTHY_TEXT: &[&str] = &["1", "true", "yes", "y", "x"];

/// Rule for recognizing a present association in a wide-table cell.
///
/// Null cells never match, whatever the rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PresenceSentinel {
    /// Numeric equality. Integers and floats equal to the value match,
    /// booleans compare as 0/1, text cells never match.
    Numeric(i64),
    /// Exact match on the trimmed text rendering of the cell.
    Text(String),
    /// Numeric 1, boolean `true`, or one of `1`, `true`, `yes`, `y`, `x`.
    Truthy,
}

impl Default for PresenceSentinel {
    fn default() -> Self {
        Self::Numeric(1)
    }
}

impl PresenceSentinel {
    pub fn matches_integer(&self, value: i64) -> bool {
        match self {
            Self::Numeric(expected) => value == *expected,
            Self::Text(expected) => value.to_string() == *expected,
            Self::Truthy => value == 1,
        }
    }

    pub fn matches_float(&self, value: f64) -> bool {
        match self {
            Self::Numeric(expected) => value == *expected as f64,
            Self::Text(expected) => value.fract() == 0.0 && format!("{value}") == *expected,
            Self::Truthy => value == 1.0,
        }
    }

    pub fn matches_bool(&self, value: bool) -> bool {
        match self {
            Self::Numeric(expected) => i64::from(value) == *expected,
            Self::Text(expected) => expected == if value { "true" } else { "false" },
            Self::Truthy => value,
        }
    }

    pub fn matches_text(&self, value: &str) -> bool {
        let trimmed = value.trim();
        match self {
            Self::Numeric(_) => false,
            Self::Text(expected) => trimmed == expected,
            Self::Truthy => TRUTHY_TEXT
                .iter()
                .any(|candidate| trimmed.eq_ignore_ascii_case(candidate)),
        }
    }
}

impl fmt::Display for PresenceSentinel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(value) => write!(f, "{value}"),
            Self::Text(value) => write!(f, "text:{value}"),
            Self::Truthy => write!(f, "truthy"),
        }
    }
}

/// Error returned when a sentinel specification cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid presence sentinel '{input}': expected an integer, 'truthy' or 'text:<value>'")]
pub struct ParseSentinelError {
    pub input: String,
}

impl FromStr for PresenceSentinel {
    type Err = ParseSentinelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(text) = trimmed.strip_prefix("text:") {
            if text.is_empty() {
                return Err(ParseSentinelError {
                    input: s.to_string(),
                });
            }
            return Ok(Self::Text(text.to_string()));
        }
        if trimmed.eq_ignore_ascii_case("truthy") {
            return Ok(Self::Truthy);
        }
        trimmed
            .parse::<i64>()
            .map(Self::Numeric)
            .map_err(|_| ParseSentinelError {
                input: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_numeric_one() {
        let sentinel = PresenceSentinel::default();
        assert!(sentinel.matches_integer(1));
        assert!(sentinel.matches_float(1.0));
        assert!(sentinel.matches_bool(true));
        assert!(!sentinel.matches_integer(0));
        assert!(!sentinel.matches_integer(2));
        assert!(!sentinel.matches_float(0.5));
        assert!(!sentinel.matches_bool(false));
        assert!(!sentinel.matches_text("1"));
    }

    #[test]
    fn test_truthy() {
        let sentinel = PresenceSentinel::Truthy;
        assert!(sentinel.matches_text("Yes"));
        assert!(sentinel.matches_text(" TRUE "));
        assert!(sentinel.matches_text("1"));
        assert!(sentinel.matches_bool(true));
        assert!(sentinel.matches_integer(1));
        assert!(!sentinel.matches_text("no"));
        assert!(!sentinel.matches_text(""));
    }

    #[test]
    fn test_text() {
        let sentinel = PresenceSentinel::Text("P".to_string());
        assert!(sentinel.matches_text("P"));
        assert!(sentinel.matches_text(" P "));
        assert!(!sentinel.matches_text("p"));
        assert!(!sentinel.matches_integer(1));
    }

    #[test]
    fn test_text_numeric_rendering() {
        let sentinel = PresenceSentinel::Text("1".to_string());
        assert!(sentinel.matches_integer(1));
        assert!(sentinel.matches_float(1.0));
        assert!(!sentinel.matches_float(1.5));
    }

    #[test]
    fn test_parse() {
        assert_eq!("1".parse(), Ok(PresenceSentinel::Numeric(1)));
        assert_eq!(" -1 ".parse(), Ok(PresenceSentinel::Numeric(-1)));
        assert_eq!("Truthy".parse(), Ok(PresenceSentinel::Truthy));
        assert_eq!(
            "text:yes".parse(),
            Ok(PresenceSentinel::Text("yes".to_string()))
        );
        assert!("text:".parse::<PresenceSentinel>().is_err());
        assert!("maybe".parse::<PresenceSentinel>().is_err());
    }

    #[test]
    fn test_display_parses_back() {
        for sentinel in [
            PresenceSentinel::Numeric(1),
            PresenceSentinel::Truthy,
            PresenceSentinel::Text("Y".to_string()),
        ] {
            let parsed: PresenceSentinel = sentinel.to_string().parse().unwrap();
            assert_eq!(parsed, sentinel);
        }
    }
}
