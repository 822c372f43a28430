//! Gomoku game core: board mechanics and the turn-taking session.

mod board;
mod opponent;
mod session;
mod types;

pub use board::{Board, DEFAULT_BOARD_SIZE, WIN_LENGTH};
pub use opponent::{FirstEmptyStrategy, MoveStrategy, RandomStrategy};
pub use session::{GameSession, NullSink, ResultSink};
pub use types::{Cell, GameStatus, Player};
