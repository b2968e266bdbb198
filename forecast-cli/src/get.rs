use anyhow::Result;
use forecast_core::{Config, WeatherProvider};
use std::io::Write;
use tracing::warn;

use crate::{cli::GetArgs, render::render};

/// `forecast get`: resolve the query, fetch once, print the report.
///
/// Lookup failures are printed for the user and are not errors here.
pub async fn run<W: Write>(
    args: GetArgs,
    config: &Config,
    provider: &dyn WeatherProvider,
    out: &mut W,
) -> Result<()> {
    let query = match config.resolve_query(args.city.as_deref(), args.units) {
        Ok(query) => query,
        Err(e) => {
            writeln!(out, "{e}")?;
            return Ok(());
        }
    };

    if args.city.is_none() {
        writeln!(out, "No city specified. Using preconfigured default city: {}", query.city)?;
    }
    if args.units.is_none() {
        writeln!(out, "No units specified. Using preconfigured default units: {}", query.units)?;
    }

    match provider.current_weather(&query).await {
        Ok(report) => write!(out, "{}", render(&report))?,
        Err(e) => {
            warn!(error = %e, city = %query.city, "weather lookup failed");
            writeln!(out, "{e}")?;
        }
    }

    Ok(())
}
