//! Field-level validation shared by the modality forms.

use std::collections::BTreeMap;
use thiserror::Error;

/// Smallest amount a request may carry.
pub const MIN_AMOUNT: f64 = 0.01;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Este campo es obligatorio")]
    Required,
    #[error("Ingrese un monto válido")]
    NotANumber,
    #[error("El monto mínimo es Q0.01")]
    BelowMinimum,
    #[error("Debe tener al menos {0} caracteres")]
    TooShort(usize),
}

/// Errors of one form, keyed by the backend field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<&'static str, FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps the first error reported for a field.
    pub fn add(&mut self, field: &'static str, error: FieldError) {
        self.0.entry(field).or_insert(error);
    }

    pub fn get(&self, field: &str) -> Option<&FieldError> {
        self.0.get(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }

    /// Checks a mandatory text field. Whitespace-only counts as empty.
    pub fn require(&mut self, field: &'static str, value: &str) -> bool {
        if value.trim().is_empty() {
            self.add(field, FieldError::Required);
            false
        } else {
            true
        }
    }

    /// Mandatory text with a minimum length (in characters, trimmed).
    pub fn require_min_len(&mut self, field: &'static str, value: &str, min: usize) {
        if self.require(field, value) && value.trim().chars().count() < min {
            self.add(field, FieldError::TooShort(min));
        }
    }

    /// Mandatory amount of at least [`MIN_AMOUNT`].
    pub fn require_amount(&mut self, field: &'static str, raw: &str) {
        if let Err(e) = parse_amount(raw) {
            self.add(field, e);
        }
    }
}

/// Parses the amount typed by the user. Accepts `,` as thousands separator.
pub fn parse_amount(raw: &str) -> Result<f64, FieldError> {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        return Err(FieldError::Required);
    }
    let value: f64 = cleaned.parse().map_err(|_| FieldError::NotANumber)?;
    if !value.is_finite() {
        return Err(FieldError::NotANumber);
    }
    if value < MIN_AMOUNT {
        return Err(FieldError::BelowMinimum);
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("1,250.75"), Ok(1250.75));
        assert_eq!(parse_amount("0.01"), Ok(0.01));
        assert_eq!(parse_amount(""), Err(FieldError::Required));
        assert_eq!(parse_amount("  "), Err(FieldError::Required));
        assert_eq!(parse_amount("abc"), Err(FieldError::NotANumber));
        assert_eq!(parse_amount("0"), Err(FieldError::BelowMinimum));
        assert_eq!(parse_amount("-5"), Err(FieldError::BelowMinimum));
    }

    #[test]
    fn test_min_len_reports_required_first() {
        let mut errors = ValidationErrors::new();
        errors.require_min_len("nombre_cuenta", "", 3);
        errors.require_min_len("numero_cuenta", "1234", 8);
        assert_eq!(errors.get("nombre_cuenta"), Some(&FieldError::Required));
        assert_eq!(errors.get("numero_cuenta"), Some(&FieldError::TooShort(8)));
        assert_eq!(
            errors.get("numero_cuenta").map(ToString::to_string).as_deref(),
            Some("Debe tener al menos 8 caracteres")
        );
    }

    #[test]
    fn test_first_error_wins() {
        let mut errors = ValidationErrors::new();
        errors.add("monto", FieldError::Required);
        errors.add("monto", FieldError::BelowMinimum);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("monto"), Some(&FieldError::Required));
    }
}
