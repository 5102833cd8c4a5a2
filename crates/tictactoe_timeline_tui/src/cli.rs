//! Command-line interface.

use clap::Parser;
use std::path::PathBuf;
use tictactoe_timeline::Language;

/// Tic-tac-toe with a time-travel move history
#[derive(Parser, Debug, Clone)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe in the terminal and jump back to any move", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (optional)
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Interface language: en or ru
    #[arg(short, long)]
    pub language: Option<Language>,

    /// Start with the move list in descending order
    #[arg(long)]
    pub descending: bool,

    /// Write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
