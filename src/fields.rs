//! Coercion of loosely typed JSON scalars into column values.
//!
//! Clients send `"phone_number": 600111222` or `"price": "1500"` as often as
//! the canonical types, so text columns take any string or number and numeric
//! columns take numbers or numeric strings.

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("Missing required fields")]
    Missing,
    #[error("Invalid value for field: {0}")]
    Invalid(&'static str),
}

/// Text column value. Absent and `null` are `None`; arrays, objects and booleans are invalid.
pub fn text(key: &'static str, value: Option<Value>) -> Result<Option<String>, FieldError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(_) => Err(FieldError::Invalid(key)),
    }
}

/// Text column that must be present and not blank.
pub fn required_text(key: &'static str, value: Option<Value>) -> Result<String, FieldError> {
    text(key, value)?
        .filter(|s| !s.trim().is_empty())
        .ok_or(FieldError::Missing)
}

/// Numeric column value. A blank string counts as absent.
pub fn number(key: &'static str, value: Option<Value>) -> Result<Option<f64>, FieldError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n.as_f64().map(Some).ok_or(FieldError::Invalid(key)),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(Value::String(s)) => parse_number(&s).map(Some).ok_or(FieldError::Invalid(key)),
        Some(_) => Err(FieldError::Invalid(key)),
    }
}

/// Finite decimal number; `NaN` and infinities are rejected.
pub fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|f| f.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn text_accepts_strings_and_numbers() {
        assert_eq!(text("cv", None), Ok(None));
        assert_eq!(text("cv", Some(Value::Null)), Ok(None));
        assert_eq!(text("cv", Some(json!("x"))), Ok(Some("x".into())));
        assert_eq!(text("phone_number", Some(json!(600111222))), Ok(Some("600111222".into())));
        assert_eq!(text("cv", Some(json!(true))), Err(FieldError::Invalid("cv")));
        assert_eq!(text("cv", Some(json!(["a"]))), Err(FieldError::Invalid("cv")));
    }

    #[test]
    fn required_text_reports_missing_before_blank() {
        assert_eq!(required_text("name", None), Err(FieldError::Missing));
        assert_eq!(required_text("name", Some(json!("  "))), Err(FieldError::Missing));
        assert_eq!(required_text("name", Some(json!({}))), Err(FieldError::Invalid("name")));
        assert_eq!(required_text("employer", Some(json!(12))), Ok("12".into()));
    }

    #[test]
    fn number_coerces_numeric_strings() {
        assert_eq!(number("price", Some(json!(1500))), Ok(Some(1500.0)));
        assert_eq!(number("price", Some(json!(" 1500.5 "))), Ok(Some(1500.5)));
        assert_eq!(number("price", Some(json!(""))), Ok(None));
        assert_eq!(number("price", Some(json!("cheap"))), Err(FieldError::Invalid("price")));
        assert_eq!(number("price", Some(json!("NaN"))), Err(FieldError::Invalid("price")));
        assert_eq!(number("price", Some(json!(false))), Err(FieldError::Invalid("price")));
    }

    #[test]
    fn parse_number_rejects_non_finite() {
        assert_eq!(parse_number("2000"), Some(2000.0));
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("-inf"), None);
    }
}
