//! Parsing of raw menu input into the values the registry expects.

use chrono::NaiveDateTime;

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("could not read '{value}' as a date-time (expected {format})")]
    DateTime {
        value: String,
        format: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("input closed")]
    Closed,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Parses a date-time typed by the operator using the configured `format`.
pub fn parse_datetime(raw: &str, format: &str) -> Result<NaiveDateTime, InputError> {
    let value = raw.trim();
    NaiveDateTime::parse_from_str(value, format).map_err(|source| InputError::DateTime {
        value: value.to_string(),
        format: format.to_string(),
        source,
    })
}

/// Splits a comma separated list, dropping blank entries.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike, Weekday};

    #[test]
    fn parse_datetime_uses_configured_format() {
        let parsed = parse_datetime(" 16/06/2025 10:00 ", "%d/%m/%Y %H:%M").expect("valid");
        assert_eq!(parsed.weekday(), Weekday::Mon);
        assert_eq!(parsed.hour(), 10);

        let parsed = parse_datetime("2025-06-16T10:00", "%Y-%m-%dT%H:%M").expect("valid");
        assert_eq!(parsed.day(), 16);
    }

    #[test]
    fn parse_datetime_reports_expected_format() {
        let err = parse_datetime("tomorrow", "%d/%m/%Y %H:%M").expect_err("not a date");
        assert!(matches!(err, InputError::DateTime { .. }));
        assert!(err.to_string().contains("%d/%m/%Y %H:%M"));
    }

    #[test]
    fn split_list_drops_blanks() {
        assert_eq!(
            split_list("Paracetamol, Ibuprofen,, "),
            vec!["Paracetamol".to_string(), "Ibuprofen".to_string()]
        );
        assert!(split_list(" , ").is_empty());
    }
}
