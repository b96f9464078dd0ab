//! Command-line interface for rewind.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Rewind - tic-tac-toe with a browsable move history
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Tic-tac-toe with time travel through the move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Path to the config file (defaults are used if it doesn't exist)
        #[arg(short, long, default_value = "rewind.toml")]
        config: PathBuf,

        #[command(flatten)]
        settings: SettingsArgs,
    },

    /// Apply a list of moves without a UI and print the result
    Replay {
        /// Comma-separated cells, as indices 0-8 or labels like "center"
        moves: String,

        /// Jump to this move after replaying
        #[arg(long)]
        jump: Option<usize>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,

        /// Path to the config file (defaults are used if it doesn't exist)
        #[arg(short, long, default_value = "rewind.toml")]
        config: PathBuf,

        #[command(flatten)]
        settings: SettingsArgs,
    },
}

/// Overrides for the config file.
#[derive(Args, Debug, Clone, Default)]
pub struct SettingsArgs {
    /// Name shown for X
    #[arg(long)]
    pub player1: Option<String>,

    /// Name shown for O
    #[arg(long)]
    pub player2: Option<String>,

    /// List the latest move first
    #[arg(long)]
    pub descending: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_play_defaults() {
        let cli = Cli::try_parse_from(["rewind", "play"]).unwrap();
        match cli.command {
            Command::Play { config, settings } => {
                assert_eq!(config, PathBuf::from("rewind.toml"));
                assert!(settings.player1.is_none());
                assert!(!settings.descending);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_replay() {
        let cli = Cli::try_parse_from([
            "rewind",
            "replay",
            "0,4,1",
            "--jump",
            "1",
            "--json",
            "--player1",
            "Ana",
        ])
        .unwrap();
        match cli.command {
            Command::Replay {
                moves,
                jump,
                json,
                settings,
                ..
            } => {
                assert_eq!(moves, "0,4,1");
                assert_eq!(jump, Some(1));
                assert!(json);
                assert_eq!(settings.player1.as_deref(), Some("Ana"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
