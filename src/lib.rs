//! Gomoku library - console five-in-a-row with persistent history
//!
//! # Architecture
//!
//! - **Game**: board mechanics, win detection, and the turn-taking
//!   session (human vs. uniform-random computer)
//! - **Db**: SQLite-backed history of completed games via Diesel
//! - **Console**: menu loop, board rendering, and move input
//!
//! # Example
//!
//! ```no_run
//! use gomoku::{GameSession, NullSink, Player};
//!
//! let mut session = GameSession::new(7, Box::new(NullSink));
//! assert_eq!(session.current_player(), Player::Human);
//! assert!(session.make_move(3, 3));
//! session.make_computer_move();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod db;
mod game;

// Console driver (public module: binary and integration tests share it)
pub mod console;

// Crate-level exports - Database
pub use db::{DbError, DbResultSink, GameRepository, GameResult, NewGameResult};

// Crate-level exports - Game core
pub use game::{
    Board, Cell, DEFAULT_BOARD_SIZE, FirstEmptyStrategy, GameSession, GameStatus, MoveStrategy,
    NullSink, Player, RandomStrategy, ResultSink, WIN_LENGTH,
};
