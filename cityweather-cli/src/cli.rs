use anyhow::{Context, bail};
use chrono::Local;
use clap::{Parser, Subcommand};
use cityweather_core::{AppController, Config, QueryResult, Report};
use inquire::{CustomType, InquireError, Text};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "cityweather",
    version,
    about = "Current weather and the next 24 hours for any city"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show weather for a city.
    Show {
        /// City or place name, e.g. "London".
        city: String,

        /// Print the report as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Prompt for city names until cancelled (Esc or Ctrl-C).
    Interactive,

    /// Edit service endpoints, the client identifier and map zoom.
    Configure,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        tracing::debug!(command = ?self.command, "Running command");

        match self.command {
            Command::Show { city, json } => show(&city, json).await,
            Command::Interactive => interactive().await,
            Command::Configure => configure(),
        }
    }
}

async fn show(city: &str, json: bool) -> anyhow::Result<()> {
    let mut app = Config::load()?.controller()?;

    let Some(result) = app.run_query(city).await else {
        bail!("Enter a city name, e.g. `cityweather show London`.");
    };

    if let Some(message) = render::failure_message(&result) {
        bail!(message);
    }

    if let QueryResult::Success(report) = result {
        if json {
            let out = serde_json::to_string_pretty(&report)
                .context("Failed to serialize report to JSON")?;
            println!("{out}");
        } else {
            print_report(&report)?;
        }
    }

    Ok(())
}

async fn interactive() -> anyhow::Result<()> {
    let mut app: AppController = Config::load()?.controller()?;

    loop {
        let city = match Text::new("Enter city name:").prompt() {
            Ok(city) => city,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                return Ok(());
            }
            Err(e) => return Err(e).context("Failed to read city name"),
        };

        let Some(result) = app.run_query(&city).await else {
            continue;
        };

        match render::failure_message(&result) {
            Some(message) => eprintln!("{message}"),
            None => {
                if let QueryResult::Success(report) = &result {
                    print_report(report)?;
                }
            }
        }
        println!();
    }
}

fn configure() -> anyhow::Result<()> {
    let mut cfg = Config::load()?;

    cfg.geocoder.user_agent = Text::new("Client identifier (User-Agent):")
        .with_default(&cfg.geocoder.user_agent)
        .prompt()?;

    cfg.geocoder.endpoint = Text::new("Geocoding search endpoint:")
        .with_default(&cfg.geocoder.endpoint)
        .prompt()?;

    cfg.weather.endpoint = Text::new("Forecast endpoint:")
        .with_default(&cfg.weather.endpoint)
        .prompt()?;

    cfg.map.zoom = CustomType::<u8>::new("Map zoom level (1-19):")
        .with_default(cfg.map.zoom)
        .with_error_message("Please type a whole number between 1 and 19")
        .prompt()?
        .clamp(1, 19);

    let path = cfg.save()?;
    println!("Configuration saved to {}", path.display());

    Ok(())
}

fn print_report(report: &Report) -> anyhow::Result<()> {
    let mut out = String::new();
    render::write_report(&mut out, report, &Local::now())?;
    print!("{out}");
    Ok(())
}
