//! Rewind - unified CLI
//!
//! Plays tic-tac-toe in the terminal, or replays a move list headlessly.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use rewind_tui::{
    App, Cli, Command, ReplayReport, SettingsArgs, TerminalGuard, TuiConfig, parse_moves, replay, ui,
};
use std::io::{self, Stdout};
use std::path::Path;
use std::time::Duration;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config, settings } => run_play(&config, &settings),
        Command::Replay {
            moves,
            jump,
            json,
            config,
            settings,
        } => run_replay(&moves, jump, json, &config, &settings),
    }
}

/// Run the terminal UI
fn run_play(config_path: &Path, settings: &SettingsArgs) -> Result<()> {
    let config = TuiConfig::load_or_default(config_path)?.with_overrides(settings);
    init_file_tracing(&config)?;

    info!("Starting Rewind TUI");

    let mut app = App::new(config.initial_state());
    let res = {
        let _guard = TerminalGuard::enter(io::stdout())?;
        let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        run_app(&mut terminal, &mut app)
    };

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(
        moves = app.state().history().len() - 1,
        "Rewind TUI exited"
    );
    res
}

/// Event loop: draw, then apply one input event.
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if app.should_quit() {
            return Ok(());
        }

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }
        match event::read()? {
            Event::Key(key) => app.handle_key(key),
            Event::Mouse(mouse) => {
                let size = terminal.size()?;
                app.handle_mouse(mouse, Rect::new(0, 0, size.width, size.height));
            }
            _ => {}
        }
    }
}

/// Apply moves headlessly and print the result
fn run_replay(
    moves: &str,
    jump: Option<usize>,
    json: bool,
    config_path: &Path,
    settings: &SettingsArgs,
) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = TuiConfig::load_or_default(config_path)?.with_overrides(settings);
    let moves = parse_moves(moves)?;
    let state = replay(config.initial_state(), &moves, jump);
    let report = ReplayReport::of(&state);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("Failed to encode report")?
        );
    } else {
        print!("{}", report.to_text());
    }
    Ok(())
}

/// Logs go to a file; the terminal belongs to the UI.
fn init_file_tracing(config: &TuiConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}
