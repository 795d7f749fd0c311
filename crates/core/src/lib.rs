//! # Clinic Core
//!
//! Domain model for a single clinic's administration:
//! - Patient and doctor registration keyed by national id and license number
//! - Appointment scheduling against each doctor's weekday specialties
//! - Prescriptions and a per-patient, append-only clinical history
//!
//! Everything lives in memory inside a [`ClinicRegistry`].
//!
//! **No presentation concerns**: parsing user input, formatting output, and the interactive
//! menu belong in `clinic-cli`.

pub mod appointment;
pub mod constants;
pub mod doctor;
pub mod error;
pub mod history;
pub mod patient;
pub mod prescription;
pub mod registry;
pub mod validation;

pub use appointment::Appointment;
pub use clinic_types::{LicenseNumber, NationalId, NonEmptyText, TextError};
pub use doctor::{Doctor, Specialty};
pub use error::{ClinicError, ClinicResult, PrescriptionFault, RecordKind, Unavailability};
pub use history::ClinicalHistory;
pub use patient::Patient;
pub use prescription::Prescription;
pub use registry::ClinicRegistry;

pub use chrono::Weekday;
