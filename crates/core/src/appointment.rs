//! Booked appointments.

use chrono::{Datelike, NaiveDateTime, Weekday};
use serde::Serialize;

use crate::constants::DATETIME_DISPLAY_FORMAT;
use crate::{Doctor, LicenseNumber, NationalId, NonEmptyText, Patient};

/// A patient's slot with a doctor for one specialty. Immutable once booked.
///
/// The patient and doctor are referenced by key; the registry that created the appointment
/// resolves them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Appointment {
    patient: NationalId,
    doctor: LicenseNumber,
    starts_at: NaiveDateTime,
    specialty: NonEmptyText,
}

impl Appointment {
    pub fn new(
        patient: &Patient,
        doctor: &Doctor,
        starts_at: NaiveDateTime,
        specialty: NonEmptyText,
    ) -> Self {
        Self {
            patient: patient.national_id().clone(),
            doctor: doctor.license_number().clone(),
            starts_at,
            specialty,
        }
    }

    pub fn patient(&self) -> &NationalId {
        &self.patient
    }

    pub fn doctor(&self) -> &LicenseNumber {
        &self.doctor
    }

    pub fn starts_at(&self) -> NaiveDateTime {
        self.starts_at
    }

    pub fn weekday(&self) -> Weekday {
        self.starts_at.weekday()
    }

    pub fn specialty(&self) -> &str {
        self.specialty.as_str()
    }

    /// True when this appointment occupies `doctor`'s slot at `at`.
    pub fn occupies(&self, doctor: &str, at: NaiveDateTime) -> bool {
        self.doctor.as_str() == doctor && self.starts_at == at
    }
}

impl std::fmt::Display for Appointment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Appointment({}, patient {}, doctor {}, {})",
            self.starts_at.format(DATETIME_DISPLAY_FORMAT),
            self.patient,
            self.doctor,
            self.specialty
        )
    }
}
