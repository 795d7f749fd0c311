use chrono::{NaiveDateTime, Weekday};

use crate::constants::weekday_name;

/// Which registry collection a key belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Patient,
    Doctor,
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordKind::Patient => write!(f, "patient"),
            RecordKind::Doctor => write!(f, "doctor"),
        }
    }
}

/// Why a doctor could not take an appointment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Unavailability {
    #[error("no doctor is registered with that license number")]
    UnknownDoctor,
    #[error("no specialty is offered on {}", weekday_name(.0))]
    NoSpecialtyOn(Weekday),
    #[error("offers {offered} on {}, not {requested}", weekday_name(.weekday))]
    SpecialtyMismatch {
        weekday: Weekday,
        offered: String,
        requested: String,
    },
}

/// Why a prescription was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PrescriptionFault {
    #[error("unknown patient {0}")]
    UnknownPatient(String),
    #[error("unknown doctor {0}")]
    UnknownDoctor(String),
    #[error("{0}")]
    Rejected(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ClinicError {
    #[error("invalid input: {0}")]
    Validation(String),
    #[error("{kind} {key} is already registered")]
    DuplicateKey { kind: RecordKind, key: String },
    #[error("no patient registered with national id {0}")]
    PatientNotFound(String),
    #[error("doctor {license} is unavailable: {reason}")]
    DoctorUnavailable {
        license: String,
        reason: Unavailability,
    },
    #[error("doctor {license} already has an appointment at {at}")]
    AppointmentConflict { license: String, at: NaiveDateTime },
    #[error("invalid prescription: {0}")]
    InvalidPrescription(PrescriptionFault),
}

pub type ClinicResult<T> = std::result::Result<T, ClinicError>;
