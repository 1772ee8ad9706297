//! Raw-mode and alternate-screen lifecycle.

use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io;
use tracing::{debug, warn};

/// Guard for the terminal mode. Restores the terminal on drop.
///
/// Created before anything that can fail, so every early return after
/// raw mode is enabled still leaves the terminal usable.
pub struct TerminalGuard {
    restored: bool,
}

impl TerminalGuard {
    /// Enables raw mode and switches to the alternate screen.
    pub fn enter() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let guard = Self { restored: false };
        execute!(io::stdout(), EnterAlternateScreen)
            .context("Failed to enter alternate screen")?;
        Ok(guard)
    }

    /// Runs every restore step, then reports the first failure.
    pub fn restore(&mut self) -> io::Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;
        debug!("Restoring terminal");
        first_error([
            disable_raw_mode(),
            execute!(io::stdout(), LeaveAlternateScreen),
            execute!(io::stdout(), Show),
        ])
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            warn!(error = %e, "Failed to restore terminal");
        }
    }
}

/// First error among already-completed steps, or `Ok` if all succeeded.
pub(crate) fn first_error<I>(results: I) -> io::Result<()>
where
    I: IntoIterator<Item = io::Result<()>>,
{
    results.into_iter().find(Result::is_err).unwrap_or(Ok(()))
}
