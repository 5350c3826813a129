//! Terminal management with RAII cleanup.
//!
//! `TerminalManager` puts the terminal in raw mode on the alternate screen
//! and puts everything back when dropped, whether the app exits normally or
//! unwinds.
//!
//! # Example
//!
//! ```no_run
//! use pizza_party::terminal::{setup_panic_hook, TerminalManager};
//!
//! fn main() -> color_eyre::Result<()> {
//!     setup_panic_hook();
//!     let mut term_manager = TerminalManager::new()?;
//!     let terminal = term_manager.terminal();
//!     // ... run the app ...
//!     Ok(())
//! }
//! ```

mod panic;
mod setup;

pub use panic::setup_panic_hook;
pub use setup::{emergency_restore, enter_tui_mode, leave_tui_mode};

use crossterm::terminal::enable_raw_mode;
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io::{self, Stdout};

use crate::error::AppResult;

/// Restores terminal state on drop. Created by `TerminalManager`.
pub struct TerminalGuard {
    cleaned_up: bool,
}

impl TerminalGuard {
    fn new() -> Self {
        Self { cleaned_up: false }
    }

    /// Restore now. Later calls, including the one from `Drop`, are no-ops.
    pub fn cleanup(&mut self) {
        if self.cleaned_up {
            return;
        }
        self.cleaned_up = true;
        leave_tui_mode(&mut io::stdout());
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.cleanup();
    }
}

/// Owns the ratatui terminal for the lifetime of the TUI.
///
/// The panic hook from [`setup_panic_hook`] covers the cases where `Drop`
/// never runs; install it before creating the manager.
pub struct TerminalManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    guard: TerminalGuard,
}

impl TerminalManager {
    /// Enable raw mode, enter the alternate screen with bracketed paste and
    /// clear it.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::AppError::Terminal`] if any step fails. Steps
    /// already taken are undone.
    pub fn new() -> AppResult<Self> {
        enable_raw_mode()?;
        // From here on the guard undoes whatever succeeded.
        let guard = TerminalGuard::new();

        let mut stdout = io::stdout();
        enter_tui_mode(&mut stdout)?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        tracing::debug!("Terminal entered TUI mode");
        Ok(Self { terminal, guard })
    }

    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }

    pub fn size(&self) -> AppResult<Rect> {
        Ok(self.terminal.size()?.into())
    }

    /// Restore the terminal before the manager is dropped.
    pub fn restore(&mut self) -> AppResult<()> {
        self.guard.cleanup();
        self.terminal.show_cursor()?;
        tracing::debug!("Terminal restored");
        Ok(())
    }
}
