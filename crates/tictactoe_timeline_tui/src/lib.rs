//! Terminal UI for tic-tac-toe with time-travel through the move history.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod input;
pub mod terminal;
pub mod ui;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tictactoe_timeline::HistoryOrder;
use tracing::{error, info, instrument};

use app::{App, Control};
use terminal::TerminalGuard;

/// Runs the TUI until the player quits, restoring the terminal on every exit path.
pub fn run(order: HistoryOrder) -> Result<()> {
    info!(?order, "Starting tic-tac-toe TUI");

    let mut guard = TerminalGuard::enter()?;
    let res = Terminal::new(CrosstermBackend::new(io::stdout()))
        .context("Failed to create terminal")
        .and_then(|mut terminal| run_app(&mut terminal, App::new(order)));
    let restored = guard.restore().context("Failed to restore terminal");

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("TUI stopped");
    res.and(restored)
}

/// Draw, block for one key, apply it. Repeats until [`Control::Quit`].
#[instrument(skip_all)]
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if app.handle_key(key.code) == Control::Quit {
                info!(steps = app.timeline().len(), "User quit");
                return Ok(());
            }
        }
    }
}
