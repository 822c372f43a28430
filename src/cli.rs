//! Command-line interface for gomoku.

use clap::{Parser, Subcommand};

use gomoku::DEFAULT_BOARD_SIZE;

/// Gomoku - five in a row against a random computer opponent
#[derive(Parser, Debug)]
#[command(name = "gomoku")]
#[command(about = "Console Gomoku with a persistent game history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play games through the interactive console menu
    Play {
        /// Side length of the square board
        #[arg(short, long, default_value_t = DEFAULT_BOARD_SIZE)]
        size: usize,

        /// Path to the history database (created if it doesn't exist)
        #[arg(long, env = "GOMOKU_DB", default_value = "gomoku.db")]
        db_path: String,
    },

    /// Print the recorded game history and exit
    History {
        /// Path to the history database
        #[arg(long, env = "GOMOKU_DB", default_value = "gomoku.db")]
        db_path: String,
    },
}
