//! Optional YAML roster registered before the menu starts.
//!
//! ```yaml
//! patients:
//!   - full_name: Ana García
//!     national_id: "111"
//!     birth_date: 01/01/1990
//! doctors:
//!   - full_name: Dr. House
//!     license_number: MED123
//!     specialties:
//!       - name: Clinical
//!         weekdays: [monday, wednesday]
//! ```

use std::fs;
use std::path::Path;

use anyhow::Context;
use clinic_core::{ClinicRegistry, ClinicResult, Doctor, Patient, Specialty};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Roster {
    #[serde(default)]
    patients: Vec<PatientEntry>,
    #[serde(default)]
    doctors: Vec<DoctorEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PatientEntry {
    full_name: String,
    national_id: String,
    birth_date: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DoctorEntry {
    full_name: String,
    license_number: String,
    #[serde(default)]
    specialties: Vec<SpecialtyEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SpecialtyEntry {
    name: String,
    weekdays: Vec<String>,
}

/// Counts of what a roster registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterSummary {
    pub patients: usize,
    pub doctors: usize,
}

impl Roster {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read roster {}", path.display()))?;
        Self::parse(&contents).with_context(|| format!("invalid roster {}", path.display()))
    }

    pub fn parse(contents: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(contents)?)
    }

    /// Registers every entry, stopping at the first rejected one.
    pub fn apply(self, registry: &mut ClinicRegistry) -> ClinicResult<RosterSummary> {
        let summary = RosterSummary {
            patients: self.patients.len(),
            doctors: self.doctors.len(),
        };

        for entry in self.patients {
            registry.register_patient(Patient::new(
                entry.full_name,
                entry.national_id,
                entry.birth_date,
            )?)?;
        }

        for entry in self.doctors {
            let mut doctor = Doctor::new(entry.full_name, entry.license_number)?;
            for specialty in entry.specialties {
                doctor.add_specialty(Specialty::new(specialty.name, specialty.weekdays)?);
            }
            registry.register_doctor(doctor)?;
        }

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clinic_core::{ClinicError, Weekday};
    use std::io::Write;
    use tempfile::NamedTempFile;

    const ROSTER: &str = r#"
patients:
  - full_name: Ana García
    national_id: "111"
    birth_date: 01/01/1990
doctors:
  - full_name: Dr. House
    license_number: MED123
    specialties:
      - name: Clinical
        weekdays: [Monday, wednesday]
"#;

    #[test]
    fn load_registers_patients_and_doctors() {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(ROSTER.as_bytes()).expect("write roster");

        let roster = Roster::load(file.path()).expect("roster should parse");
        let mut registry = ClinicRegistry::new();
        let summary = roster.apply(&mut registry).expect("roster should apply");

        assert_eq!(
            summary,
            RosterSummary {
                patients: 1,
                doctors: 1
            }
        );
        assert!(registry.clinical_history("111").is_ok());
        let doctor = registry.doctor("MED123").expect("doctor registered");
        assert_eq!(doctor.working_days(), vec![Weekday::Mon, Weekday::Wed]);
    }

    #[test]
    fn parse_rejects_unknown_fields() {
        let err = Roster::parse("patients: []\nnurses: []\n");
        assert!(err.is_err());
    }

    #[test]
    fn apply_surfaces_duplicate_keys() {
        let roster = Roster::parse(
            r#"
patients:
  - { full_name: Ana, national_id: "111", birth_date: "x" }
  - { full_name: Luis, national_id: "111", birth_date: "y" }
"#,
        )
        .expect("valid yaml");

        let mut registry = ClinicRegistry::new();
        let err = roster.apply(&mut registry).expect_err("duplicate id");
        assert!(matches!(err, ClinicError::DuplicateKey { .. }));
    }

    #[test]
    fn apply_surfaces_validation_errors() {
        let roster = Roster::parse(
            r#"
doctors:
  - full_name: Dr. House
    license_number: MED123
    specialties:
      - { name: Clinical, weekdays: [funday] }
"#,
        )
        .expect("valid yaml");

        let err = roster
            .apply(&mut ClinicRegistry::new())
            .expect_err("unknown weekday");
        assert!(matches!(err, ClinicError::Validation(_)));
    }

    #[test]
    fn load_reports_missing_file() {
        let err = Roster::load(Path::new("/nonexistent/roster.yaml")).expect_err("missing");
        assert!(err.to_string().contains("failed to read roster"));
    }
}
