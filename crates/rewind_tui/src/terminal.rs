//! Raw-mode terminal session.

use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io::{self, Write};
use tracing::{debug, error};

/// Holds the terminal in raw mode on the alternate screen.
///
/// Dropping the guard restores the terminal, so every exit path after
/// [`TerminalGuard::enter`] leaves the shell usable.
pub struct TerminalGuard<W: Write> {
    writer: W,
}

impl<W: Write> TerminalGuard<W> {
    /// Enables raw mode, then switches `writer` to the alternate screen with
    /// mouse capture.
    pub fn enter(writer: W) -> io::Result<Self> {
        enable_raw_mode()?;
        let mut guard = Self { writer };
        execute!(guard.writer, EnterAlternateScreen, EnableMouseCapture)?;
        debug!("Terminal entered raw mode");
        Ok(guard)
    }

    fn restore(&mut self) -> io::Result<()> {
        let raw = disable_raw_mode();
        execute!(self.writer, LeaveAlternateScreen, DisableMouseCapture, Show)?;
        raw
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        match self.restore() {
            Ok(()) => debug!("Terminal restored"),
            Err(err) => error!(error = %err, "Failed to restore terminal"),
        }
    }
}
