//! Doctors and the specialties they offer on given weekdays.

use chrono::Weekday;
use serde::{Serialize, Serializer};

use crate::constants::{weekday_name, WEEK};
use crate::validation::{parse_weekday, required_license_number, required_text};
use crate::{ClinicError, ClinicResult, LicenseNumber, NonEmptyText};

/// A named practice area plus the weekdays a doctor offers it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Specialty {
    name: NonEmptyText,
    #[serde(serialize_with = "serialize_weekdays")]
    weekdays: Vec<Weekday>,
}

impl Specialty {
    /// Creates a specialty from weekday names such as `"monday"` or `"Fri"`.
    ///
    /// Names are matched case-insensitively and stored canonically, so `"Monday"` and
    /// `"MONDAY"` describe the same day. Repeated days are kept once.
    ///
    /// # Errors
    ///
    /// Returns `ClinicError::Validation` if the name is empty, no weekday is given, or a
    /// weekday name is not recognised.
    pub fn new<I, S>(name: impl AsRef<str>, weekdays: I) -> ClinicResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let days = weekdays
            .into_iter()
            .map(|day| parse_weekday(day.as_ref()))
            .collect::<ClinicResult<Vec<_>>>()?;
        Self::on_weekdays(name, days)
    }

    /// Creates a specialty from already canonical weekdays.
    pub fn on_weekdays(
        name: impl AsRef<str>,
        weekdays: impl IntoIterator<Item = Weekday>,
    ) -> ClinicResult<Self> {
        let name = required_text("specialty name", name)?;

        let mut days: Vec<Weekday> = Vec::new();
        for day in weekdays {
            if !days.contains(&day) {
                days.push(day);
            }
        }
        if days.is_empty() {
            return Err(ClinicError::Validation(format!(
                "specialty {name} must be offered on at least one weekday"
            )));
        }

        Ok(Self {
            name,
            weekdays: days,
        })
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn weekdays(&self) -> &[Weekday] {
        &self.weekdays
    }

    pub fn offers(&self, day: Weekday) -> bool {
        self.weekdays.contains(&day)
    }

    /// Case-insensitive comparison against a requested specialty name.
    pub fn matches_name(&self, requested: &str) -> bool {
        self.name.eq_ignore_case(requested)
    }
}

impl std::fmt::Display for Specialty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let days: Vec<&str> = self.weekdays.iter().map(weekday_name).collect();
        write!(f, "{} (days: {})", self.name, days.join(", "))
    }
}

fn serialize_weekdays<S: Serializer>(days: &[Weekday], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(days.iter().map(weekday_name))
}

/// A doctor and the specialties they offer, in the order they were added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Doctor {
    full_name: NonEmptyText,
    license_number: LicenseNumber,
    specialties: Vec<Specialty>,
}

impl Doctor {
    /// Creates a doctor with no specialties.
    ///
    /// # Errors
    ///
    /// Returns `ClinicError::Validation` if the name or license number is empty.
    pub fn new(full_name: impl AsRef<str>, license_number: impl AsRef<str>) -> ClinicResult<Self> {
        Ok(Self {
            full_name: required_text("doctor full name", full_name)?,
            license_number: required_license_number(license_number)?,
            specialties: Vec::new(),
        })
    }

    /// Builder-style variant of [`Doctor::add_specialty`].
    pub fn with_specialty(mut self, specialty: Specialty) -> Self {
        self.add_specialty(specialty);
        self
    }

    pub fn add_specialty(&mut self, specialty: Specialty) {
        self.specialties.push(specialty);
    }

    pub fn full_name(&self) -> &str {
        self.full_name.as_str()
    }

    pub fn license_number(&self) -> &LicenseNumber {
        &self.license_number
    }

    pub fn specialties(&self) -> &[Specialty] {
        &self.specialties
    }

    /// Returns the specialty offered on `day`, if any.
    ///
    /// When several specialties claim the same weekday the earliest added one wins. Overlapping
    /// specialties are accepted on input, so callers seeing an unexpected match should look at
    /// the doctor's data rather than at this lookup.
    pub fn specialty_for_weekday(&self, day: Weekday) -> Option<&Specialty> {
        self.specialties.iter().find(|s| s.offers(day))
    }

    /// Weekdays on which the doctor offers anything, in calendar order.
    pub fn working_days(&self) -> Vec<Weekday> {
        WEEK.into_iter()
            .filter(|day| self.specialty_for_weekday(*day).is_some())
            .collect()
    }
}

impl std::fmt::Display for Doctor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let specialties: Vec<String> = self.specialties.iter().map(ToString::to_string).collect();
        write!(
            f,
            "{}, {}, [{}]",
            self.full_name,
            self.license_number,
            specialties.join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn specialty_normalises_weekday_names() {
        let specialty =
            Specialty::new("Clinical", ["Monday", "WEDNESDAY", "monday"]).expect("valid days");
        assert_eq!(specialty.weekdays(), &[Weekday::Mon, Weekday::Wed]);
        assert!(specialty.offers(Weekday::Wed));
        assert!(!specialty.offers(Weekday::Tue));
        assert_eq!(specialty.to_string(), "Clinical (days: monday, wednesday)");
    }

    #[test]
    fn specialty_requires_name_and_days() {
        let err = Specialty::new("", ["monday"]).expect_err("empty name");
        assert!(matches!(err, ClinicError::Validation(_)));

        let err = Specialty::new("Clinical", Vec::<String>::new()).expect_err("no days");
        assert!(matches!(err, ClinicError::Validation(_)));

        let err = Specialty::new("Clinical", ["someday"]).expect_err("unknown day");
        assert!(matches!(err, ClinicError::Validation(_)));
    }

    #[test]
    fn specialty_name_match_ignores_case() {
        let specialty = Specialty::on_weekdays("Cardiology", [Weekday::Fri]).unwrap();
        assert!(specialty.matches_name("cardiology"));
        assert!(specialty.matches_name("CARDIOLOGY "));
        assert!(!specialty.matches_name("Clinical"));
    }

    #[test]
    fn doctor_requires_name_and_license() {
        assert!(matches!(
            Doctor::new("", "MED123"),
            Err(ClinicError::Validation(_))
        ));
        assert!(matches!(
            Doctor::new("Dr. House", "  "),
            Err(ClinicError::Validation(_))
        ));
    }

    #[test]
    fn specialty_for_weekday_returns_none_when_uncovered() {
        let doctor = Doctor::new("Dr. House", "MED123")
            .unwrap()
            .with_specialty(Specialty::new("Clinical", ["monday"]).unwrap());

        assert_eq!(
            doctor.specialty_for_weekday(Weekday::Mon).map(Specialty::name),
            Some("Clinical")
        );
        assert!(doctor.specialty_for_weekday(Weekday::Tue).is_none());
    }

    #[test]
    fn specialty_for_weekday_prefers_first_added_on_overlap() {
        let doctor = Doctor::new("Dr. House", "MED123")
            .unwrap()
            .with_specialty(Specialty::new("Clinical", ["monday", "tuesday"]).unwrap())
            .with_specialty(Specialty::new("Nephrology", ["tuesday", "thursday"]).unwrap());

        assert_eq!(
            doctor.specialty_for_weekday(Weekday::Tue).map(Specialty::name),
            Some("Clinical")
        );
        assert_eq!(
            doctor.specialty_for_weekday(Weekday::Thu).map(Specialty::name),
            Some("Nephrology")
        );
        assert_eq!(
            doctor.working_days(),
            vec![Weekday::Mon, Weekday::Tue, Weekday::Thu]
        );
    }

    #[test]
    fn doctor_display_lists_specialties() {
        let doctor = Doctor::new("Dr. House", "MED123")
            .unwrap()
            .with_specialty(Specialty::new("Clinical", ["monday"]).unwrap());
        assert_eq!(
            doctor.to_string(),
            "Dr. House, MED123, [Clinical (days: monday)]"
        );
    }
}
