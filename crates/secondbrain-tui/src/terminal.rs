//! Terminal setup and teardown utilities
//!
//! Handles entering/exiting raw mode and alternate screen.

use crate::{Result, TuiError};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};

/// Terminal type for the ward UI
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI rendering.
///
/// The guard is armed as soon as raw mode is on, so a failure further down
/// still leaves the shell usable.
pub fn init() -> Result<(Tui, TerminalGuard)> {
    enable_raw_mode()
        .map_err(|e| TuiError::Terminal(format!("Failed to enable raw mode: {}", e)))?;
    let guard = TerminalGuard { armed: true };

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| TuiError::Terminal(format!("Failed to enter alternate screen: {}", e)))?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)
        .map_err(|e| TuiError::Terminal(format!("Failed to create terminal: {}", e)))?;
    Ok((terminal, guard))
}

fn restore() -> Result<()> {
    execute!(io::stdout(), LeaveAlternateScreen)
        .map_err(|e| TuiError::Terminal(format!("Failed to leave alternate screen: {}", e)))?;

    disable_raw_mode()
        .map_err(|e| TuiError::Terminal(format!("Failed to disable raw mode: {}", e)))?;

    Ok(())
}

/// Keeps the terminal in ward mode until restored or dropped
///
/// `restore` reports teardown errors; dropping an armed guard (a panic or an
/// early `?` return) restores on a best-effort basis. Either way the
/// terminal is restored exactly once.
#[must_use = "dropping the guard restores the terminal immediately"]
pub struct TerminalGuard {
    armed: bool,
}

impl TerminalGuard {
    /// Restore the terminal to its original state
    pub fn restore(mut self) -> Result<()> {
        self.armed = false;
        restore()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.armed {
            let _ = restore();
        }
    }
}
