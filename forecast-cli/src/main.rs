//! Binary crate for the `forecast` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Interactive configuration
//! - Human-friendly output formatting

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

mod cli;
mod get;
mod prompter;
mod render;
mod setup;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cmd = cli::Cli::parse();
    tracing::debug!(?cmd, "parsed CLI arguments");
    cmd.run().await
}

/// Install the global tracing subscriber on stderr.
///
/// Honours `RUST_LOG`, e.g. `RUST_LOG=forecast_core=debug`; otherwise only warnings.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("forecast_cli=warn,forecast_core=warn"));

    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}
