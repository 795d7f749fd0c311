//! Input validation utilities.
//!
//! Entity constructors funnel every required field through these helpers so the error message
//! names the field that was missing.

use chrono::Weekday;

use crate::{ClinicError, ClinicResult, LicenseNumber, NationalId, NonEmptyText};

/// Validates that a required free-text field is present.
///
/// # Errors
///
/// Returns `ClinicError::Validation` naming `field` if `value` is empty or whitespace.
pub fn required_text(field: &str, value: impl AsRef<str>) -> ClinicResult<NonEmptyText> {
    NonEmptyText::new(value).map_err(|_| ClinicError::Validation(format!("{field} is required")))
}

pub fn required_national_id(value: impl AsRef<str>) -> ClinicResult<NationalId> {
    NationalId::new(value).map_err(|_| ClinicError::Validation("national id is required".into()))
}

pub fn required_license_number(value: impl AsRef<str>) -> ClinicResult<LicenseNumber> {
    LicenseNumber::new(value)
        .map_err(|_| ClinicError::Validation("license number is required".into()))
}

/// Parses a weekday name case-insensitively.
///
/// Accepts full English names and their three-letter abbreviations ("Monday", "mon", "MON").
pub fn parse_weekday(value: &str) -> ClinicResult<Weekday> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ClinicError::Validation("weekday name is required".into()));
    }
    trimmed
        .parse::<Weekday>()
        .map_err(|_| ClinicError::Validation(format!("unknown weekday '{trimmed}'")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_text_names_the_missing_field() {
        let err = required_text("patient full name", "   ").expect_err("blank should fail");
        match err {
            ClinicError::Validation(msg) => assert_eq!(msg, "patient full name is required"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn parse_weekday_is_case_insensitive() {
        assert_eq!(parse_weekday("Monday").unwrap(), Weekday::Mon);
        assert_eq!(parse_weekday(" SUNDAY ").unwrap(), Weekday::Sun);
        assert_eq!(parse_weekday("wed").unwrap(), Weekday::Wed);
    }

    #[test]
    fn parse_weekday_rejects_unknown_names() {
        let err = parse_weekday("lunes").expect_err("non-English names are a presentation concern");
        assert!(matches!(err, ClinicError::Validation(_)));

        let err = parse_weekday("").expect_err("empty should fail");
        assert!(matches!(err, ClinicError::Validation(_)));
    }
}
