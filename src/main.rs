//! Gomoku - console five-in-a-row with persistent history.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use gomoku::{DbResultSink, GameRepository, GameSession, console};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Game output goes to stdout; keep diagnostics on stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Play { size, db_path } => run_play(size, db_path),
        Command::History { db_path } => run_history(db_path),
    }
}

/// Runs the interactive console menu.
fn run_play(size: usize, db_path: String) -> Result<()> {
    anyhow::ensure!(size > 0, "board size must be positive");

    info!(size, db_path = %db_path, "Starting gomoku");

    let repository = GameRepository::new(db_path);
    repository.initialize()?;

    let sink = DbResultSink::new(repository.clone());
    let mut session = GameSession::new(size, Box::new(sink));

    console::run(&mut session, &repository)
}

/// Prints the recorded history and exits.
fn run_history(db_path: String) -> Result<()> {
    let repository = GameRepository::new(db_path);
    repository.initialize()?;
    console::show_history(&repository);
    Ok(())
}
