//! Command-line interface for the tic-tac-toe terminal UI.

use clap::Parser;
use std::path::PathBuf;

/// Tic-tac-toe with a navigable move history
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe in the terminal and revisit any earlier move", long_about = None)]
#[command(version)]
pub struct Cli {
    /// File that receives tracing output (the terminal is owned by the UI)
    #[arg(long, default_value = "tictactoe.log")]
    pub log_file: PathBuf,

    /// Start with the move list sorted latest-first
    #[arg(long)]
    pub descending: bool,
}
