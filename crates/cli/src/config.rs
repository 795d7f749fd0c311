//! Startup configuration.
//!
//! Configuration is resolved once in `main` from command-line flags, then environment
//! variables, then defaults, and passed into the menu. Nothing reads the environment after that.

use std::path::{Path, PathBuf};

use chrono::format::{Item, StrftimeItems};

/// Environment variable overriding the date-time input format.
pub const DATETIME_FORMAT_ENV: &str = "CLINIC_DATETIME_FORMAT";

/// Environment variable naming a roster file to load at startup.
pub const ROSTER_ENV: &str = "CLINIC_ROSTER";

/// Default date-time input format, e.g. `16/06/2025 10:00`.
pub const DEFAULT_DATETIME_FORMAT: &str = "%d/%m/%Y %H:%M";

/// Default log directive when `RUST_LOG` is unset.
pub const DEFAULT_LOG_DIRECTIVE: &str = "clinic=info";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("date-time format cannot be empty")]
    EmptyDateTimeFormat,
    #[error("date-time format '{0}' is not a valid strftime pattern")]
    InvalidDateTimeFormat(String),
}

/// CLI configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CliConfig {
    datetime_format: String,
    roster: Option<PathBuf>,
}

impl CliConfig {
    pub fn new(datetime_format: String, roster: Option<PathBuf>) -> Result<Self, ConfigError> {
        let datetime_format = datetime_format.trim().to_string();
        if datetime_format.is_empty() {
            return Err(ConfigError::EmptyDateTimeFormat);
        }
        if StrftimeItems::new(&datetime_format).any(|item| matches!(item, Item::Error)) {
            return Err(ConfigError::InvalidDateTimeFormat(datetime_format));
        }

        Ok(Self {
            datetime_format,
            roster,
        })
    }

    /// Resolve configuration from flag values, falling back to `env` and then defaults.
    ///
    /// `env` is injected so tests don't touch process-wide state.
    pub fn resolve(
        datetime_format: Option<String>,
        roster: Option<PathBuf>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let non_blank = |v: String| if v.trim().is_empty() { None } else { Some(v) };

        let datetime_format = datetime_format
            .or_else(|| env(DATETIME_FORMAT_ENV).and_then(non_blank))
            .unwrap_or_else(|| DEFAULT_DATETIME_FORMAT.to_string());
        let roster = roster.or_else(|| {
            env(ROSTER_ENV)
                .and_then(non_blank)
                .map(PathBuf::from)
        });

        Self::new(datetime_format, roster)
    }

    pub fn datetime_format(&self) -> &str {
        &self.datetime_format
    }

    pub fn roster(&self) -> Option<&Path> {
        self.roster.as_deref()
    }
}
