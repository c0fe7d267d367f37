//! Number and date formatting for the es-GT locale.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Timelike};

const MONTHS_ES: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Formats an amount with two decimals and a comma thousands separator.
///
/// ```
/// use contracts::shared::format::format_amount;
/// assert_eq!(format_amount(1234567.891), "1,234,567.89");
/// ```
pub fn format_amount(value: f64) -> String {
    let formatted = format!("{:.2}", value);
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (integer_part, decimal_part) = unsigned.split_once('.').unwrap_or((unsigned, "00"));

    let mut grouped = String::with_capacity(integer_part.len() + integer_part.len() / 3);
    for (i, c) in integer_part.chars().enumerate() {
        if i > 0 && (integer_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    // "-0.00" reads badly in a money column
    let sign = if grouped.chars().all(|c| c == '0' || c == ',') && decimal_part == "00" {
        ""
    } else {
        sign
    };

    format!("{}{}.{}", sign, grouped, decimal_part)
}

/// Formats a raw backend amount. Unparseable input is returned unchanged.
pub fn format_amount_str(raw: &str) -> String {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => format_amount(value),
        _ => raw.to_string(),
    }
}

/// Quetzal amount as used in limit messages: `Q1,234.56`.
pub fn format_quetzales(value: f64) -> String {
    format!("Q{}", format_amount(value))
}

fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_local());
    }
    for pattern in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, pattern) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Long Spanish date with time: `"2024-03-15 14:02:26"` -> `"15 de marzo de 2024, 14:02"`.
///
/// Unparseable input is returned unchanged.
pub fn format_long_datetime(raw: &str) -> String {
    match parse_datetime(raw) {
        Some(dt) => format!(
            "{} de {} de {}, {:02}:{:02}",
            dt.day(),
            MONTHS_ES[dt.month0() as usize],
            dt.year(),
            dt.hour(),
            dt.minute()
        ),
        None => raw.to_string(),
    }
}

/// Short date for list rows: `"15/03/2024"`.
pub fn format_short_date(raw: &str) -> String {
    match parse_datetime(raw) {
        Some(dt) => dt.format("%d/%m/%Y").to_string(),
        None => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(12.5), "12.50");
        assert_eq!(format_amount(1234.56), "1,234.56");
        assert_eq!(format_amount(1234567.891), "1,234,567.89");
        assert_eq!(format_amount(-98765.4), "-98,765.40");
        assert_eq!(format_amount(-0.001), "0.00");
    }

    #[test]
    fn test_format_amount_str() {
        assert_eq!(format_amount_str("1500.5"), "1,500.50");
        assert_eq!(format_amount_str(" 300 "), "300.00");
        assert_eq!(format_amount_str("n/a"), "n/a");
    }

    #[test]
    fn test_format_quetzales() {
        assert_eq!(format_quetzales(25000.0), "Q25,000.00");
    }

    #[test]
    fn test_format_long_datetime() {
        assert_eq!(
            format_long_datetime("2024-03-15 14:02:26"),
            "15 de marzo de 2024, 14:02"
        );
        assert_eq!(
            format_long_datetime("2024-12-01T08:05:00.000Z"),
            "1 de diciembre de 2024, 08:05"
        );
        assert_eq!(format_long_datetime("2024-01-09"), "9 de enero de 2024, 00:00");
        assert_eq!(format_long_datetime("invalid"), "invalid");
    }

    #[test]
    fn test_format_short_date() {
        assert_eq!(format_short_date("2024-03-15T14:02:26"), "15/03/2024");
        assert_eq!(format_short_date(""), "");
    }
}
