//! The clinic registry aggregate.
//!
//! `ClinicRegistry` owns every patient, doctor, appointment and clinical history. All
//! validation happens before the first mutation, so a failed operation leaves the registry
//! exactly as it was.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{Datelike, NaiveDateTime};

use crate::error::{PrescriptionFault, RecordKind, Unavailability};
use crate::validation::required_text;
use crate::{
    Appointment, ClinicError, ClinicResult, ClinicalHistory, Doctor, LicenseNumber, NationalId,
    Patient, Prescription, Specialty,
};

/// In-memory store of a single clinic.
#[derive(Debug, Default)]
pub struct ClinicRegistry {
    patients: Vec<Arc<Patient>>,
    patient_index: HashMap<NationalId, usize>,
    doctors: Vec<Doctor>,
    doctor_index: HashMap<LicenseNumber, usize>,
    appointments: Vec<Arc<Appointment>>,
    histories: HashMap<NationalId, ClinicalHistory>,
}

impl ClinicRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a patient and opens an empty clinical history for them.
    ///
    /// # Errors
    ///
    /// Returns `ClinicError::DuplicateKey` if the national id is already registered.
    pub fn register_patient(&mut self, patient: Patient) -> ClinicResult<()> {
        let national_id = patient.national_id().clone();
        if self.patient_index.contains_key(&national_id) {
            return Err(ClinicError::DuplicateKey {
                kind: RecordKind::Patient,
                key: national_id.to_string(),
            });
        }

        let patient = Arc::new(patient);
        self.patient_index
            .insert(national_id.clone(), self.patients.len());
        self.patients.push(patient.clone());
        self.histories
            .insert(national_id.clone(), ClinicalHistory::new(patient));

        tracing::debug!(national_id = %national_id, "registered patient");
        Ok(())
    }

    /// Registers a doctor.
    ///
    /// # Errors
    ///
    /// Returns `ClinicError::DuplicateKey` if the license number is already registered.
    pub fn register_doctor(&mut self, doctor: Doctor) -> ClinicResult<()> {
        let license = doctor.license_number().clone();
        if self.doctor_index.contains_key(&license) {
            return Err(ClinicError::DuplicateKey {
                kind: RecordKind::Doctor,
                key: license.to_string(),
            });
        }

        self.doctor_index.insert(license.clone(), self.doctors.len());
        self.doctors.push(doctor);

        tracing::debug!(license = %license, "registered doctor");
        Ok(())
    }

    /// Adds a specialty to an already registered doctor.
    ///
    /// # Errors
    ///
    /// Returns `ClinicError::DoctorUnavailable` if the license number is unknown.
    pub fn add_specialty(&mut self, license_number: &str, specialty: Specialty) -> ClinicResult<()> {
        let idx = self.doctor_position(license_number)?;
        let doctor = &mut self.doctors[idx];

        tracing::debug!(
            license = %doctor.license_number(),
            specialty = specialty.name(),
            "added specialty"
        );
        doctor.add_specialty(specialty);
        Ok(())
    }

    /// Books an appointment for a patient with a doctor.
    ///
    /// Checks run in a fixed order: patient, doctor, slot conflict, then the doctor's specialty
    /// for the weekday of `starts_at`.
    ///
    /// # Errors
    ///
    /// - `ClinicError::PatientNotFound` if the national id is unknown.
    /// - `ClinicError::DoctorUnavailable` if the license number is unknown, the doctor offers
    ///   nothing on that weekday, or what they offer is not `specialty`.
    /// - `ClinicError::AppointmentConflict` if the doctor is already booked at `starts_at`.
    pub fn schedule_appointment(
        &mut self,
        national_id: &str,
        license_number: &str,
        specialty: &str,
        starts_at: NaiveDateTime,
    ) -> ClinicResult<Arc<Appointment>> {
        let patient_idx = self
            .patient_position(national_id)
            .ok_or_else(|| ClinicError::PatientNotFound(national_id.trim().to_string()))?;
        let doctor_idx = self.doctor_position(license_number)?;
        let doctor = &self.doctors[doctor_idx];

        if self
            .appointments
            .iter()
            .any(|a| a.occupies(doctor.license_number().as_str(), starts_at))
        {
            return Err(ClinicError::AppointmentConflict {
                license: doctor.license_number().to_string(),
                at: starts_at,
            });
        }

        let weekday = starts_at.weekday();
        let offered = doctor
            .specialty_for_weekday(weekday)
            .ok_or_else(|| ClinicError::DoctorUnavailable {
                license: doctor.license_number().to_string(),
                reason: Unavailability::NoSpecialtyOn(weekday),
            })?;
        if !offered.matches_name(specialty) {
            return Err(ClinicError::DoctorUnavailable {
                license: doctor.license_number().to_string(),
                reason: Unavailability::SpecialtyMismatch {
                    weekday,
                    offered: offered.name().to_string(),
                    requested: specialty.trim().to_string(),
                },
            });
        }

        let specialty = required_text("specialty name", specialty)?;
        let patient = &self.patients[patient_idx];
        let appointment = Arc::new(Appointment::new(patient, doctor, starts_at, specialty));

        let history = self
            .histories
            .get_mut(patient.national_id().as_str())
            .ok_or_else(|| ClinicError::PatientNotFound(patient.national_id().to_string()))?;
        history.add_appointment(appointment.clone());
        self.appointments.push(appointment.clone());

        tracing::info!(
            national_id = %appointment.patient(),
            license = %appointment.doctor(),
            starts_at = %appointment.starts_at(),
            "scheduled appointment"
        );
        Ok(appointment)
    }

    /// Issues a prescription and files it in the patient's clinical history.
    ///
    /// # Errors
    ///
    /// Returns `ClinicError::InvalidPrescription` if the patient or doctor is unknown, or if
    /// the medication list is rejected (empty list or blank entry).
    pub fn issue_prescription<I, S>(
        &mut self,
        national_id: &str,
        license_number: &str,
        medications: I,
    ) -> ClinicResult<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patient_idx = self.patient_position(national_id).ok_or_else(|| {
            ClinicError::InvalidPrescription(PrescriptionFault::UnknownPatient(
                national_id.trim().to_string(),
            ))
        })?;
        let doctor_idx = self.doctor_index.get(license_number.trim()).copied().ok_or_else(|| {
            ClinicError::InvalidPrescription(PrescriptionFault::UnknownDoctor(
                license_number.trim().to_string(),
            ))
        })?;

        let patient = &self.patients[patient_idx];
        let prescription = Prescription::new(patient, &self.doctors[doctor_idx], medications)
            .map_err(|e| match e {
                ClinicError::Validation(msg) => {
                    ClinicError::InvalidPrescription(PrescriptionFault::Rejected(msg))
                }
                other => other,
            })?;

        let history = self
            .histories
            .get_mut(patient.national_id().as_str())
            .ok_or_else(|| ClinicError::PatientNotFound(patient.national_id().to_string()))?;

        tracing::info!(
            national_id = %prescription.patient(),
            license = %prescription.doctor(),
            "issued prescription"
        );
        history.add_prescription(prescription);
        Ok(())
    }

    /// Read access to a patient's clinical history.
    ///
    /// # Errors
    ///
    /// Returns `ClinicError::PatientNotFound` if the national id is unknown.
    pub fn clinical_history(&self, national_id: &str) -> ClinicResult<&ClinicalHistory> {
        self.histories
            .get(national_id.trim())
            .ok_or_else(|| ClinicError::PatientNotFound(national_id.trim().to_string()))
    }

    pub fn patient(&self, national_id: &str) -> Option<&Patient> {
        self.patient_position(national_id)
            .map(|idx| self.patients[idx].as_ref())
    }

    pub fn doctor(&self, license_number: &str) -> Option<&Doctor> {
        self.doctor_index
            .get(license_number.trim())
            .map(|idx| &self.doctors[*idx])
    }

    /// Patients in registration order.
    pub fn patients(&self) -> impl Iterator<Item = &Patient> {
        self.patients.iter().map(AsRef::as_ref)
    }

    /// Doctors in registration order.
    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    /// Every appointment in booking order.
    pub fn appointments(&self) -> &[Arc<Appointment>] {
        &self.appointments
    }

    fn patient_position(&self, national_id: &str) -> Option<usize> {
        self.patient_index.get(national_id.trim()).copied()
    }

    fn doctor_position(&self, license_number: &str) -> ClinicResult<usize> {
        self.doctor_index
            .get(license_number.trim())
            .copied()
            .ok_or_else(|| ClinicError::DoctorUnavailable {
                license: license_number.trim().to_string(),
                reason: Unavailability::UnknownDoctor,
            })
    }
}
