//! Terminal front end for rewind.
//!
//! - **App**: focus, cursor, and key/mouse handling around a
//!   [`rewind_core::Store`].
//! - **UI**: stateless ratatui rendering plus the shared screen layout.
//! - **Config**: TOML settings with command-line overrides.
//! - **Replay**: headless application of a move list.
//! - **Terminal**: raw-mode guard that restores the shell on drop.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod input;
pub mod replay;
pub mod terminal;
pub mod ui;

pub use app::{App, Focus};
pub use cli::{Cli, Command, SettingsArgs};
pub use config::{ConfigError, TuiConfig};
pub use replay::{ParseMovesError, ReplayReport, parse_moves, replay};
pub use terminal::TerminalGuard;
