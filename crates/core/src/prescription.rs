//! Prescriptions issued by a doctor to a patient.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::validation::required_text;
use crate::{ClinicError, ClinicResult, Doctor, LicenseNumber, NationalId, NonEmptyText, Patient};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Prescription {
    patient: NationalId,
    doctor: LicenseNumber,
    medications: Vec<NonEmptyText>,
    issued_at: DateTime<Utc>,
}

impl Prescription {
    /// Creates a prescription stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns `ClinicError::Validation` if `medications` is empty or any entry is blank.
    pub fn new<I, S>(patient: &Patient, doctor: &Doctor, medications: I) -> ClinicResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let medications = medications
            .into_iter()
            .map(|m| required_text("medication name", m))
            .collect::<ClinicResult<Vec<_>>>()?;
        if medications.is_empty() {
            return Err(ClinicError::Validation(
                "a prescription must list at least one medication".into(),
            ));
        }

        Ok(Self {
            patient: patient.national_id().clone(),
            doctor: doctor.license_number().clone(),
            medications,
            issued_at: Utc::now(),
        })
    }

    pub fn patient(&self) -> &NationalId {
        &self.patient
    }

    pub fn doctor(&self) -> &LicenseNumber {
        &self.doctor
    }

    pub fn medications(&self) -> impl Iterator<Item = &str> {
        self.medications.iter().map(NonEmptyText::as_str)
    }

    pub fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }
}

impl std::fmt::Display for Prescription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let meds: Vec<&str> = self.medications().collect();
        write!(
            f,
            "Prescription(patient {}, doctor {}, [{}], {})",
            self.patient,
            self.doctor,
            meds.join(", "),
            self.issued_at.to_rfc3339()
        )
    }
}
