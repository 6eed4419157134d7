//! Request validation utilities.
//!
//! The bridge treats missing, `null` and `""` the same way. Inside the crate
//! that is an `Option<String>` where `Some("")` is collapsed to `None`.

use crate::types::{Error, Result};
use serde::{de, Deserialize, Deserializer};
use serde_json::Number;

/// Treat an empty string as absent.
pub fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

/// Require a present, non-empty text field.
pub fn require_text<'a>(value: Option<&'a str>, field: &str) -> Result<&'a str> {
    present(value).ok_or_else(|| Error::validation(format!("{} cannot be empty", field)))
}

/// Serde helper: deserialize an optional string, mapping `""` to `None`.
pub fn blank_as_none<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

/// Serde helper: deserialize an optional integer that may arrive as a
/// double (`3.0`). Fractional or out-of-range values are rejected.
pub fn integral_number<'de, D>(deserializer: D) -> std::result::Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(number) = Option::<Number>::deserialize(deserializer)? else {
        return Ok(None);
    };
    if let Some(value) = number.as_i64() {
        return Ok(Some(value));
    }
    match number.as_f64() {
        Some(value)
            if value.fract() == 0.0 && value >= i64::MIN as f64 && value < i64::MAX as f64 =>
        {
            Ok(Some(value as i64))
        }
        _ => Err(de::Error::custom(format!(
            "invalid value: {}, expected an integer",
            number
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Counter {
        #[serde(default, deserialize_with = "integral_number")]
        count: Option<i64>,
    }

    fn counter(value: serde_json::Value) -> serde_json::Result<Option<i64>> {
        serde_json::from_value::<Counter>(value).map(|c| c.count)
    }

    #[test]
    fn test_present() {
        assert_eq!(present(Some("x")), Some("x"));
        assert_eq!(present(Some("")), None);
        assert_eq!(present(None), None);
        // Whitespace is content, not absence.
        assert_eq!(present(Some(" ")), Some(" "));
    }

    #[test]
    fn test_require_text() {
        assert_eq!(require_text(Some("T"), "title").unwrap(), "T");

        let err = require_text(Some(""), "title").unwrap_err();
        assert_eq!(err.to_string(), "validation error: title cannot be empty");

        let err = require_text(None, "body").unwrap_err();
        assert!(matches!(err, Error::Validation(msg) if msg == "body cannot be empty"));
    }

    #[test]
    fn test_integral_number() {
        assert_eq!(counter(json!({"count": 3})).unwrap(), Some(3));
        assert_eq!(counter(json!({"count": 3.0})).unwrap(), Some(3));
        assert_eq!(counter(json!({"count": -2.0})).unwrap(), Some(-2));
        assert_eq!(counter(json!({"count": null})).unwrap(), None);
        assert_eq!(counter(json!({})).unwrap(), None);

        let err = counter(json!({"count": 3.5})).unwrap_err();
        assert!(err.to_string().contains("expected an integer"), "{err}");
        assert!(counter(json!({"count": 1e300})).is_err());
        assert!(counter(json!({"count": "3"})).is_err());
    }
}
