use clap::{Args, Parser, Subcommand};
use forecast_core::{ConfigStore, OpenWeatherProvider, Units};
use std::io;

use crate::{get, prompter::InquirePrompter, setup};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "forecast",
    version,
    about = "A CLI tool for fetching weather forecasts",
    long_about = "Fetches current weather for a city from OpenWeatherMap."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Get the current weather for a city.
    ///
    /// If no city is provided, the default city from the config file is used.
    Get(GetArgs),

    /// Run the interactive configuration setup.
    Setup,
}

#[derive(Debug, Clone, Args)]
pub struct GetArgs {
    /// City name.
    #[arg(short, long)]
    pub city: Option<String>,

    /// Units of measurement (metric or imperial).
    #[arg(short, long)]
    pub units: Option<Units>,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let store = ConfigStore::default_location()?;
        let mut prompter = InquirePrompter::new();
        let mut out = io::stdout();

        match self.command {
            Command::Setup => setup::run_command(&store, &mut prompter, &mut out),
            Command::Get(args) => {
                let Some(config) = setup::load_or_init(&store, &mut prompter, &mut out)? else {
                    return Ok(());
                };

                let provider = OpenWeatherProvider::new();
                get::run(args, &config, &provider, &mut out).await
            }
        }
    }
}
