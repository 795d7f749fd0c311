use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use clinic_core::ClinicRegistry;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod input;
mod menu;
mod roster;

use config::{CliConfig, DEFAULT_LOG_DIRECTIVE};
use menu::Menu;
use roster::Roster;

#[derive(Parser)]
#[command(name = "clinica")]
#[command(about = "In-memory clinic administration menu")]
struct Cli {
    /// YAML roster of patients and doctors to register before the menu starts
    #[arg(long)]
    roster: Option<PathBuf>,
    /// strftime pattern used to read appointment date-times
    #[arg(long)]
    datetime_format: Option<String>,
}

/// Entry point for the clinic menu.
///
/// # Environment Variables
/// - `CLINIC_DATETIME_FORMAT`: date-time input format (default: "%d/%m/%Y %H:%M")
/// - `CLINIC_ROSTER`: roster file to load at startup
/// - `RUST_LOG`: log filter (default: "clinic=info"), logs go to stderr
fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(DEFAULT_LOG_DIRECTIVE.parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = CliConfig::resolve(cli.datetime_format, cli.roster, |key| {
        std::env::var(key).ok()
    })?;

    let mut registry = ClinicRegistry::new();
    if let Some(path) = config.roster() {
        let summary = Roster::load(path)?
            .apply(&mut registry)
            .with_context(|| format!("failed to register roster {}", path.display()))?;
        tracing::info!(
            patients = summary.patients,
            doctors = summary.doctors,
            "++ Loaded roster from {}",
            path.display()
        );
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Menu::new(&mut registry, &config, stdin.lock(), stdout.lock()).run()?;

    Ok(())
}
