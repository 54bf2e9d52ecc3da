//! Command-line interface for strictly_timetravel.

use clap::{Parser, ValueEnum};

/// Strictly Timetravel - drive a tic-tac-toe history from the terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_timetravel")]
#[command(about = "Headless driver for the time-travel tic-tac-toe model", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Actions to apply, separated by ';' (e.g. "play 4; jump 0; sort").
    /// Reads one action per line from stdin when omitted.
    #[arg(short, long)]
    pub actions: Option<String>,

    /// Present the history list newest first from the start
    #[arg(long)]
    pub descending: bool,

    /// Output format after each action
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Tracing filter directive (falls back to RUST_LOG, then "warn")
    #[arg(long)]
    pub log_filter: Option<String>,
}

/// How state is printed after each action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Status line, board and history labels
    Text,
    /// One JSON object per action
    Json,
}
