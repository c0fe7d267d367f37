//! Lenient decoders for the accounting backend.
//!
//! The backend is inconsistent about scalar types: ids come as numbers or
//! strings, flags as `0/1`, booleans or `null`, amounts as decimal strings.
//! These helpers normalize such values at the edge so the rest of the model
//! works with one representation.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl Scalar {
    fn into_text(self) -> String {
        match self {
            Scalar::Bool(b) => b.to_string(),
            Scalar::Int(i) => i.to_string(),
            Scalar::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
            Scalar::Float(f) => f.to_string(),
            Scalar::Text(s) => s,
        }
    }

    fn into_flag(self) -> bool {
        match self {
            Scalar::Bool(b) => b,
            Scalar::Int(i) => i != 0,
            Scalar::Float(f) => f != 0.0,
            Scalar::Text(s) => matches!(s.trim(), "1" | "true" | "TRUE" | "True"),
        }
    }

    fn into_int(self) -> Option<i64> {
        match self {
            Scalar::Bool(b) => Some(b as i64),
            Scalar::Int(i) => Some(i),
            Scalar::Float(f) if f.is_finite() => Some(f.trunc() as i64),
            Scalar::Float(_) => None,
            Scalar::Text(s) => parse_int_prefix(&s),
        }
    }

    fn into_number(self) -> Option<f64> {
        match self {
            Scalar::Bool(b) => Some(if b { 1.0 } else { 0.0 }),
            Scalar::Int(i) => Some(i as f64),
            Scalar::Float(f) => Some(f),
            Scalar::Text(s) => s.trim().parse::<f64>().ok(),
        }
    }
}

/// Parses the leading integer of a string (`"12.7"` -> 12, `"42abc"` -> 42).
pub fn parse_int_prefix(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    let end = trimmed
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || (i == 0 && (c == '-' || c == '+'))))
        .map(|(i, _)| i)
        .unwrap_or(trimmed.len());
    trimmed[..end].parse::<i64>().ok()
}

/// Number or string -> `String`. `null` becomes an empty string.
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?
        .map(Scalar::into_text)
        .unwrap_or_default())
}

/// Number or string -> `Option<String>`. `null` and `""` become `None`.
pub fn opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?
        .map(Scalar::into_text)
        .filter(|s| !s.is_empty()))
}

/// `0/1`, booleans, `"1"` or `null` -> `bool`.
pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?
        .map(Scalar::into_flag)
        .unwrap_or(false))
}

/// Like [`flag`] but keeps `null` distinguishable.
pub fn opt_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?.map(Scalar::into_flag))
}

/// Integer, float or numeric string -> `i64`. Anything else becomes 0.
pub fn int<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?
        .and_then(Scalar::into_int)
        .unwrap_or(0))
}

pub fn opt_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?.and_then(Scalar::into_number))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize, Default)]
    #[serde(default)]
    struct Probe {
        #[serde(deserialize_with = "text")]
        id: String,
        #[serde(deserialize_with = "opt_text")]
        name: Option<String>,
        #[serde(deserialize_with = "flag")]
        active: bool,
        #[serde(deserialize_with = "opt_flag")]
        same: Option<bool>,
        #[serde(deserialize_with = "int")]
        count: i64,
        #[serde(deserialize_with = "opt_number")]
        amount: Option<f64>,
    }

    #[test]
    fn test_numbers_and_strings_normalize() {
        let p: Probe = serde_json::from_str(
            r#"{"id": 17, "name": 3.0, "active": 1, "same": 0, "count": "12", "amount": "1500.50"}"#,
        )
        .unwrap();
        assert_eq!(p.id, "17");
        assert_eq!(p.name.as_deref(), Some("3"));
        assert!(p.active);
        assert_eq!(p.same, Some(false));
        assert_eq!(p.count, 12);
        assert_eq!(p.amount, Some(1500.5));
    }

    #[test]
    fn test_nulls_and_missing_fields_default() {
        let p: Probe =
            serde_json::from_str(r#"{"id": null, "name": "", "active": null, "same": null}"#)
                .unwrap();
        assert_eq!(p.id, "");
        assert_eq!(p.name, None);
        assert!(!p.active);
        assert_eq!(p.same, None);
        assert_eq!(p.count, 0);
        assert_eq!(p.amount, None);
    }

    #[test]
    fn test_parse_int_prefix() {
        assert_eq!(parse_int_prefix("12.7"), Some(12));
        assert_eq!(parse_int_prefix(" 42abc"), Some(42));
        assert_eq!(parse_int_prefix("-3"), Some(-3));
        assert_eq!(parse_int_prefix("abc"), None);
        assert_eq!(parse_int_prefix(""), None);
    }
}
