use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use forecast_core::{Config, ForecastApp, TriggerOutcome, codes, provider_from_config};
use inquire::{InquireError, Text};
use tracing::debug;

use crate::terminal::{OutputFormat, TerminalSurface};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "forecast", version, about = "Five-day weather forecast from Open-Meteo")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the five-day forecast for a pair of coordinates.
    Show {
        /// Latitude in decimal degrees, e.g. 52.52.
        #[arg(allow_hyphen_values = true)]
        latitude: String,

        /// Longitude in decimal degrees, e.g. 13.41.
        #[arg(allow_hyphen_values = true)]
        longitude: String,

        /// Print the cards as a JSON array.
        #[arg(long)]
        json: bool,
    },

    /// Prompt for coordinates repeatedly; Esc or Ctrl-C quits.
    Interactive,

    /// List the known weather codes.
    Codes,

    /// Update the configuration file.
    Configure {
        /// Base URL of the Open-Meteo API.
        #[arg(long)]
        endpoint: Option<String>,

        /// Default log filter, e.g. "info" or "forecast_core=debug".
        #[arg(long)]
        log_level: Option<String>,
    },
}

impl Cli {
    pub async fn run(self, config: Config) -> anyhow::Result<ExitCode> {
        match self.command {
            Command::Show {
                latitude,
                longitude,
                json,
            } => {
                let format = if json {
                    OutputFormat::Json
                } else {
                    OutputFormat::Text
                };
                show(&config, &latitude, &longitude, format).await
            }
            Command::Interactive => interactive(&config).await,
            Command::Codes => {
                for entry in codes::known() {
                    println!("{:>3}  {}", entry.code, entry.description);
                }
                Ok(ExitCode::SUCCESS)
            }
            Command::Configure {
                endpoint,
                log_level,
            } => configure(config, endpoint, log_level),
        }
    }
}

async fn show(
    config: &Config,
    latitude: &str,
    longitude: &str,
    format: OutputFormat,
) -> anyhow::Result<ExitCode> {
    let app = ForecastApp::new(provider_from_config(config), TerminalSurface::new(format));

    let outcome = app.trigger(latitude, longitude).await;
    app.surface().flush_cards()?;

    Ok(match outcome {
        TriggerOutcome::Rendered { .. } => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    })
}

async fn interactive(config: &Config) -> anyhow::Result<ExitCode> {
    let app = ForecastApp::new(
        provider_from_config(config),
        TerminalSurface::new(OutputFormat::Text),
    );
    debug!(endpoint = app.provider().endpoint(), "interactive session started");

    let mut latitude = String::new();
    let mut longitude = String::new();

    loop {
        let Some(lat) = prompt("Latitude:", &latitude, LATITUDE_HELP)? else {
            break;
        };
        let Some(lon) = prompt("Longitude:", &longitude, LONGITUDE_HELP)? else {
            break;
        };

        app.trigger(&lat, &lon).await;
        println!();

        latitude = lat;
        longitude = lon;
    }

    Ok(ExitCode::SUCCESS)
}

const LATITUDE_HELP: &str = "Enter to continue to longitude, Esc to quit";
const LONGITUDE_HELP: &str = "Enter to fetch the forecast, Esc to quit";

/// Read one field. `None` means the user asked to leave.
fn prompt(label: &str, previous: &str, help: &str) -> anyhow::Result<Option<String>> {
    let answer = Text::new(label)
        .with_initial_value(previous)
        .with_help_message(help)
        .prompt();

    match answer {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(err) => Err(err).context("Failed to read input"),
    }
}

fn configure(
    mut config: Config,
    endpoint: Option<String>,
    log_level: Option<String>,
) -> anyhow::Result<ExitCode> {
    if endpoint.is_none() && log_level.is_none() {
        let answer = Text::new("Open-Meteo endpoint:")
            .with_default(config.endpoint())
            .prompt()
            .context("Failed to read endpoint")?;
        config.set_endpoint(&answer)?;
    }

    if let Some(endpoint) = endpoint {
        config.set_endpoint(&endpoint)?;
    }
    if let Some(level) = log_level {
        config.set_log_level(&level);
    }

    let path = config.save()?;
    println!("Saved configuration to {}", path.display());

    Ok(ExitCode::SUCCESS)
}
