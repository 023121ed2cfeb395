//! RawCutoffRow - Loader-facing row shape and the normalization step.
//!
//! The loader hands over rows whose cells may have been dynamically typed
//! (numbers, strings, nulls or missing columns). Normalization maps every
//! column onto the typed [`CutoffRecord`] exactly once, at ingestion.
//!
//! # Rules
//!
//! - Text: trimmed strings; empty, null, missing or non-scalar cells are absent.
//!   Numeric cells are kept as their decimal text.
//! - Ranks: integers >= 1 (numeric or numeric text); anything else is absent.
//! - Round: must be an integer >= 1, otherwise the whole row is rejected.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::CutoffRecord;
use crate::domain::foundation::{Rank, ValidationError};

const ROUND_COLUMN: &str = "Round";

/// A row as delivered by the loader, keyed by the published column headers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawCutoffRow {
    #[serde(rename = "College Type", default)]
    pub college_type: Value,
    #[serde(rename = "Institute", default)]
    pub institute: Value,
    #[serde(rename = "Academic Program Name", default)]
    pub program: Value,
    #[serde(rename = "Quota", default)]
    pub quota: Value,
    #[serde(rename = "Category", default)]
    pub category: Value,
    #[serde(rename = "Gender", default)]
    pub gender: Value,
    #[serde(rename = "Round", default)]
    pub round: Value,
    #[serde(rename = "Opening Rank", default)]
    pub opening_rank: Value,
    #[serde(rename = "Closing Rank", default)]
    pub closing_rank: Value,
}

impl RawCutoffRow {
    /// Normalizes this row into a typed record.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` when the round cell is missing, not an
    /// integer, or below 1. Every other malformed cell degrades to absent.
    pub fn normalize(&self) -> Result<CutoffRecord, ValidationError> {
        let round = normalize_round(&self.round)?;

        Ok(CutoffRecord {
            college_type: normalize_text(&self.college_type),
            institute: normalize_text(&self.institute),
            program: normalize_text(&self.program),
            quota: normalize_text(&self.quota),
            category: normalize_text(&self.category),
            gender: normalize_text(&self.gender),
            round,
            opening_rank: normalize_rank(&self.opening_rank),
            closing_rank: normalize_rank(&self.closing_rank),
        })
    }
}

fn normalize_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn normalize_rank(value: &Value) -> Option<Rank> {
    let number = integer_cell("rank", value).ok()?;
    let number = u32::try_from(number).ok()?;
    Rank::try_new(number).ok()
}

fn normalize_round(value: &Value) -> Result<u32, ValidationError> {
    let number = integer_cell(ROUND_COLUMN, value)?;
    u32::try_from(number)
        .ok()
        .filter(|round| *round >= 1)
        .ok_or_else(|| ValidationError::out_of_range(ROUND_COLUMN, 1, i64::from(u32::MAX), number))
}

/// Reads a cell as a whole number, accepting numeric text and integral floats.
fn integer_cell(field: &str, value: &Value) -> Result<i64, ValidationError> {
    match value {
        Value::Null => Err(ValidationError::missing_field(field)),
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().and_then(integral))
            .ok_or_else(|| ValidationError::invalid_format(field, format!("not an integer: {}", n))),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Err(ValidationError::missing_field(field));
            }
            trimmed
                .parse::<i64>()
                .ok()
                .or_else(|| trimmed.parse::<f64>().ok().and_then(integral))
                .ok_or_else(|| {
                    ValidationError::invalid_format(field, format!("not an integer: '{}'", trimmed))
                })
        }
        other => Err(ValidationError::invalid_format(
            field,
            format!("unexpected value: {}", other),
        )),
    }
}

fn integral(f: f64) -> Option<i64> {
    (f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64).then_some(f as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(value: Value) -> RawCutoffRow {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn normalizes_fully_populated_row() {
        let raw = row(json!({
            "Institute": "Indian Institute of Technology Bombay, Mumbai",
            "College Type": "IIT",
            "Academic Program Name": "Computer Science and Engineering (4 Years, Bachelor of Technology)",
            "Quota": "AI",
            "Category": "OPEN",
            "Gender": "Gender-Neutral",
            "Round": 1,
            "Opening Rank": 1,
            "Closing Rank": 68
        }));

        let record = raw.normalize().unwrap();
        assert_eq!(record.institute.as_deref(), Some("Indian Institute of Technology Bombay, Mumbai"));
        assert_eq!(record.college_type.as_deref(), Some("IIT"));
        assert_eq!(record.round, 1);
        assert_eq!(record.opening_rank.map(|r| r.value()), Some(1));
        assert_eq!(record.closing_rank.map(|r| r.value()), Some(68));
    }

    #[test]
    fn missing_columns_become_absent() {
        let record = row(json!({ "Round": 2 })).normalize().unwrap();
        assert_eq!(record.institute, None);
        assert_eq!(record.gender, None);
        assert_eq!(record.opening_rank, None);
    }

    #[test]
    fn empty_and_null_text_become_absent() {
        let record = row(json!({ "Round": 1, "Quota": "  ", "Category": null }))
            .normalize()
            .unwrap();
        assert_eq!(record.quota, None);
        assert_eq!(record.category, None);
    }

    #[test]
    fn text_is_trimmed() {
        let record = row(json!({ "Round": 1, "Quota": " HS " })).normalize().unwrap();
        assert_eq!(record.quota.as_deref(), Some("HS"));
    }

    #[test]
    fn numeric_text_cell_keeps_decimal_text() {
        let record = row(json!({ "Round": 1, "Category": 5 })).normalize().unwrap();
        assert_eq!(record.category.as_deref(), Some("5"));
    }

    #[test]
    fn rank_accepts_numeric_text_and_integral_floats() {
        let record = row(json!({ "Round": 1, "Opening Rank": "1520", "Closing Rank": 2210.0 }))
            .normalize()
            .unwrap();
        assert_eq!(record.opening_rank.map(|r| r.value()), Some(1520));
        assert_eq!(record.closing_rank.map(|r| r.value()), Some(2210));
    }

    #[test]
    fn unusable_ranks_become_absent() {
        for bad in [json!("NaN"), json!("12P"), json!(0), json!(-4), json!(10.5), json!(""), json!(true)] {
            let record = row(json!({ "Round": 1, "Opening Rank": bad.clone() }))
                .normalize()
                .unwrap();
            assert_eq!(record.opening_rank, None, "expected absent for {}", bad);
        }
    }

    #[test]
    fn round_accepts_numeric_text() {
        let record = row(json!({ "Round": "4" })).normalize().unwrap();
        assert_eq!(record.round, 4);
    }

    #[test]
    fn missing_round_rejects_row() {
        let err = row(json!({ "Institute": "X" })).normalize().unwrap_err();
        assert_eq!(err, ValidationError::missing_field("Round"));
    }

    #[test]
    fn zero_round_rejects_row() {
        let err = row(json!({ "Round": 0 })).normalize().unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { actual: 0, .. }));
    }

    #[test]
    fn non_numeric_round_rejects_row() {
        let err = row(json!({ "Round": "final" })).normalize().unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { .. }));
        assert_eq!(err.field(), "Round");
    }
}
