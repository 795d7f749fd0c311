//! Per-patient clinical history.

use std::sync::Arc;

use serde::Serialize;

use crate::{Appointment, NationalId, Patient, Prescription};

/// Append-only record of one patient's appointments and prescriptions.
///
/// Appointments are shared with the registry's flat appointment list.
#[derive(Debug, Clone, Serialize)]
pub struct ClinicalHistory {
    patient: Arc<Patient>,
    appointments: Vec<Arc<Appointment>>,
    prescriptions: Vec<Prescription>,
}

impl ClinicalHistory {
    pub fn new(patient: Arc<Patient>) -> Self {
        Self {
            patient,
            appointments: Vec::new(),
            prescriptions: Vec::new(),
        }
    }

    pub fn patient(&self) -> &Patient {
        &self.patient
    }

    pub fn national_id(&self) -> &NationalId {
        self.patient.national_id()
    }

    pub fn add_appointment(&mut self, appointment: Arc<Appointment>) {
        self.appointments.push(appointment);
    }

    pub fn add_prescription(&mut self, prescription: Prescription) {
        self.prescriptions.push(prescription);
    }

    /// Appointments in booking order.
    pub fn appointments(&self) -> &[Arc<Appointment>] {
        &self.appointments
    }

    /// Prescriptions in issue order.
    pub fn prescriptions(&self) -> &[Prescription] {
        &self.prescriptions
    }
}

impl std::fmt::Display for ClinicalHistory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "ClinicalHistory({}", self.patient)?;
        writeln!(f, "Appointments:")?;
        for appointment in &self.appointments {
            writeln!(f, "{appointment}")?;
        }
        writeln!(f, "Prescriptions:")?;
        for prescription in &self.prescriptions {
            writeln!(f, "{prescription}")?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Doctor, NonEmptyText, Specialty};
    use chrono::{NaiveDate, Timelike};

    fn parties() -> (Arc<Patient>, Doctor) {
        let patient = Arc::new(Patient::new("Ana García", "111", "01/01/1990").unwrap());
        let doctor = Doctor::new("Dr. House", "MED123")
            .unwrap()
            .with_specialty(Specialty::new("Clinical", ["monday"]).unwrap());
        (patient, doctor)
    }

    #[test]
    fn entries_are_appended_in_order() {
        let (patient, doctor) = parties();
        let mut history = ClinicalHistory::new(patient.clone());
        let monday = NaiveDate::from_ymd_opt(2025, 6, 16)
            .and_then(|d| d.and_hms_opt(10, 0, 0))
            .unwrap();

        for hour in [10, 11] {
            let at = monday.with_hour(hour).expect("valid hour");
            history.add_appointment(Arc::new(Appointment::new(
                &patient,
                &doctor,
                at,
                NonEmptyText::new("Clinical").unwrap(),
            )));
        }
        history.add_prescription(Prescription::new(&patient, &doctor, ["Paracetamol"]).unwrap());

        let hours: Vec<_> = history
            .appointments()
            .iter()
            .map(|a| a.starts_at().format("%H").to_string())
            .collect();
        assert_eq!(hours, vec!["10", "11"]);
        assert_eq!(history.prescriptions().len(), 1);
    }

    #[test]
    fn display_lists_sections() {
        let (patient, doctor) = parties();
        let mut history = ClinicalHistory::new(patient.clone());
        history.add_prescription(Prescription::new(&patient, &doctor, ["Paracetamol"]).unwrap());

        let rendered = history.to_string();
        assert!(rendered.starts_with("ClinicalHistory(Ana García, 111, 01/01/1990\n"));
        assert!(rendered.contains("Appointments:\nPrescriptions:\n"));
        assert!(rendered.contains("[Paracetamol]"));
    }

    #[test]
    fn serializes_as_structured_data() {
        let (patient, doctor) = parties();
        let mut history = ClinicalHistory::new(patient.clone());
        history.add_prescription(Prescription::new(&patient, &doctor, ["Paracetamol"]).unwrap());

        let json = serde_json::to_value(&history).expect("serialize history");
        assert_eq!(json["patient"]["national_id"], "111");
        assert_eq!(json["prescriptions"][0]["medications"][0], "Paracetamol");
        assert_eq!(json["appointments"].as_array().map(Vec::len), Some(0));
    }
}
