//! Tic-tac-toe with time travel, in the terminal.

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe_timeline_tui::{Cli, TuiConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = TuiConfig::resolve(&cli)?;

    init_tracing(&config)?;
    info!(
        language = %config.language(),
        initial_sort = %config.initial_sort(),
        "Configuration resolved"
    );

    tictactoe_timeline_tui::run(&config)
}

/// Logs go to a file so they never draw over the UI.
fn init_tracing(config: &TuiConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    Ok(())
}
