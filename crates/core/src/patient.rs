//! Patient demographics.

use serde::Serialize;

use crate::validation::{required_national_id, required_text};
use crate::{ClinicResult, NationalId, NonEmptyText};

/// A registered patient. Identity is the national id; nothing changes after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Patient {
    full_name: NonEmptyText,
    national_id: NationalId,
    /// Kept exactly as supplied; the registry never interprets it.
    birth_date: NonEmptyText,
}

impl Patient {
    /// Creates a patient record.
    ///
    /// # Errors
    ///
    /// Returns `ClinicError::Validation` if any of the three fields is empty.
    pub fn new(
        full_name: impl AsRef<str>,
        national_id: impl AsRef<str>,
        birth_date: impl AsRef<str>,
    ) -> ClinicResult<Self> {
        Ok(Self {
            full_name: required_text("patient full name", full_name)?,
            national_id: required_national_id(national_id)?,
            birth_date: required_text("patient birth date", birth_date)?,
        })
    }

    pub fn full_name(&self) -> &str {
        self.full_name.as_str()
    }

    pub fn national_id(&self) -> &NationalId {
        &self.national_id
    }

    pub fn birth_date(&self) -> &str {
        self.birth_date.as_str()
    }
}

impl std::fmt::Display for Patient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}, {}, {}",
            self.full_name, self.national_id, self.birth_date
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClinicError;

    #[test]
    fn new_keeps_birth_date_verbatim() {
        let patient = Patient::new("Ana García", "111", "01/01/1990").expect("valid patient");
        assert_eq!(patient.full_name(), "Ana García");
        assert_eq!(patient.national_id().as_str(), "111");
        assert_eq!(patient.birth_date(), "01/01/1990");
        assert_eq!(patient.to_string(), "Ana García, 111, 01/01/1990");
    }

    #[test]
    fn new_rejects_each_missing_field() {
        for (name, id, birth) in [("", "111", "01/01/1990"), ("Ana", " ", "x"), ("Ana", "1", "")] {
            let err = Patient::new(name, id, birth).expect_err("missing field should fail");
            assert!(matches!(err, ClinicError::Validation(_)));
        }
    }
}
