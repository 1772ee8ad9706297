//! Tic-tac-toe TUI entry point.

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe_timeline::HistoryOrder;
use tictactoe_timeline_tui::cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Log to a file so tracing output never lands on the alternate screen
    let log_file = std::fs::File::create(&cli.log_file)
        .with_context(|| format!("Failed to create log file {}", cli.log_file.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    let order = if cli.descending {
        HistoryOrder::Descending
    } else {
        HistoryOrder::Ascending
    };

    tictactoe_timeline_tui::run(order)
}
