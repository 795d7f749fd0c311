//! Interactive text menu over a [`ClinicRegistry`].
//!
//! The menu owns all parsing and rendering; the registry only sees typed values. Every failed
//! option is reported to the operator and the loop carries on.

use std::io::{BufRead, Write};

use clinic_core::{ClinicError, ClinicRegistry, Doctor, Patient, Specialty, Weekday};

use crate::config::CliConfig;
use crate::input::{parse_datetime, split_list, InputError};

const MENU: &str = "
--- Clinic Menu ---
1) Register patient
2) Register doctor
3) Schedule appointment
4) Add specialty to doctor
5) Issue prescription
6) Show clinical history
7) List appointments
8) List patients
9) List doctors
0) Exit
";

#[derive(Debug, thiserror::Error)]
pub enum MenuError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Clinic(#[from] ClinicError),
}

impl From<std::io::Error> for MenuError {
    fn from(err: std::io::Error) -> Self {
        MenuError::Input(InputError::Io(err))
    }
}

/// English label for a weekday, used only for display.
pub fn weekday_label(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

pub struct Menu<'a, R, W> {
    registry: &'a mut ClinicRegistry,
    config: &'a CliConfig,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(registry: &'a mut ClinicRegistry, config: &'a CliConfig, input: R, output: W) -> Self {
        Self {
            registry,
            config,
            input,
            output,
        }
    }

    /// Runs until the operator picks `0` or input ends.
    pub fn run(&mut self) -> Result<(), MenuError> {
        loop {
            write!(self.output, "{MENU}")?;
            let choice = match self.prompt("Select an option: ") {
                Ok(choice) => choice,
                Err(MenuError::Input(InputError::Closed)) => break,
                Err(e) => return Err(e),
            };

            let outcome = match choice.as_str() {
                "1" => self.register_patient(),
                "2" => self.register_doctor(),
                "3" => self.schedule_appointment(),
                "4" => self.add_specialty(),
                "5" => self.issue_prescription(),
                "6" => self.show_history(),
                "7" => self.list_appointments(),
                "8" => self.list_patients(),
                "9" => self.list_doctors(),
                "0" => {
                    writeln!(self.output, "Goodbye.")?;
                    break;
                }
                _ => {
                    writeln!(self.output, "Invalid option")?;
                    Ok(())
                }
            };

            match outcome {
                Ok(()) => {}
                Err(MenuError::Input(InputError::Closed)) => break,
                Err(MenuError::Input(InputError::Io(e))) => return Err(e.into()),
                Err(e) => {
                    tracing::warn!(option = %choice, error = %e, "menu option failed");
                    writeln!(self.output, "Error: {e}")?;
                }
            }
        }

        self.output.flush()?;
        Ok(())
    }

    fn prompt(&mut self, label: &str) -> Result<String, MenuError> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(InputError::Closed.into());
        }
        Ok(line.trim().to_string())
    }

    fn register_patient(&mut self) -> Result<(), MenuError> {
        let name = self.prompt("Full name: ")?;
        let national_id = self.prompt("National ID: ")?;
        let birth_date = self.prompt("Birth date (dd/mm/yyyy): ")?;

        self.registry
            .register_patient(Patient::new(name, national_id, birth_date)?)?;
        writeln!(self.output, "Patient registered.")?;
        Ok(())
    }

    fn register_doctor(&mut self) -> Result<(), MenuError> {
        let name = self.prompt("Full name: ")?;
        let license = self.prompt("License number: ")?;

        self.registry.register_doctor(Doctor::new(name, license)?)?;
        writeln!(self.output, "Doctor registered.")?;
        Ok(())
    }

    fn add_specialty(&mut self) -> Result<(), MenuError> {
        let license = self.prompt("Doctor license number: ")?;
        let name = self.prompt("Specialty name: ")?;
        let days = self.prompt("Weekdays (comma separated): ")?;

        let specialty = Specialty::new(name, split_list(&days))?;
        self.registry.add_specialty(&license, specialty)?;
        writeln!(self.output, "Specialty added.")?;
        Ok(())
    }

    fn schedule_appointment(&mut self) -> Result<(), MenuError> {
        let national_id = self.prompt("Patient national ID: ")?;
        let license = self.prompt("Doctor license number: ")?;
        let specialty = self.prompt("Specialty: ")?;
        let label = format!("Date and time ({}): ", self.config.datetime_format());
        let raw = self.prompt(&label)?;

        let starts_at = parse_datetime(&raw, self.config.datetime_format())?;
        let appointment =
            self.registry
                .schedule_appointment(&national_id, &license, &specialty, starts_at)?;
        writeln!(
            self.output,
            "Appointment scheduled for {} {}.",
            weekday_label(appointment.weekday()),
            appointment.starts_at().format(self.config.datetime_format())
        )?;
        Ok(())
    }

    fn issue_prescription(&mut self) -> Result<(), MenuError> {
        let national_id = self.prompt("Patient national ID: ")?;
        let license = self.prompt("Doctor license number: ")?;
        let medications = self.prompt("Medications (comma separated): ")?;

        self.registry
            .issue_prescription(&national_id, &license, split_list(&medications))?;
        writeln!(self.output, "Prescription issued.")?;
        Ok(())
    }

    fn show_history(&mut self) -> Result<(), MenuError> {
        let national_id = self.prompt("Patient national ID: ")?;
        let history = self.registry.clinical_history(&national_id)?;
        writeln!(self.output, "{history}")?;
        Ok(())
    }

    fn list_appointments(&mut self) -> Result<(), MenuError> {
        if self.registry.appointments().is_empty() {
            writeln!(self.output, "No appointments.")?;
        }
        for appointment in self.registry.appointments() {
            writeln!(
                self.output,
                "{} {appointment}",
                weekday_label(appointment.weekday())
            )?;
        }
        Ok(())
    }

    fn list_patients(&mut self) -> Result<(), MenuError> {
        let mut any = false;
        for patient in self.registry.patients() {
            any = true;
            writeln!(self.output, "{patient}")?;
        }
        if !any {
            writeln!(self.output, "No patients.")?;
        }
        Ok(())
    }

    fn list_doctors(&mut self) -> Result<(), MenuError> {
        if self.registry.doctors().is_empty() {
            writeln!(self.output, "No doctors.")?;
        }
        for doctor in self.registry.doctors() {
            writeln!(self.output, "{doctor}")?;
        }
        Ok(())
    }
}
