//! Move selection strategies for the computer opponent.

use super::board::Board;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::instrument;

/// Chooses a move for the computer given the current board.
///
/// Implementations return `None` only when the board has no empty
/// cells left.
pub trait MoveStrategy {
    /// Picks a `(row, col)` coordinate among the currently empty cells.
    fn choose(&mut self, board: &Board) -> Option<(usize, usize)>;
}

/// Strategy that selects uniformly at random from the empty cells.
///
/// The pick is a single draw over the collected empty coordinates, so
/// it always terminates; there is no retry loop that could redraw an
/// occupied cell.
#[derive(Debug)]
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    /// Creates a strategy seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveStrategy for RandomStrategy {
    #[instrument(skip(self, board))]
    fn choose(&mut self, board: &Board) -> Option<(usize, usize)> {
        let empty = board.empty_cells();
        if empty.is_empty() {
            return None;
        }
        Some(empty[self.rng.random_range(0..empty.len())])
    }
}

/// Strategy that picks the first empty cell in row-major order.
///
/// Deterministic counterpart to [`RandomStrategy`], used by tests that
/// need reproducible full-game runs.
#[derive(Debug, Default)]
pub struct FirstEmptyStrategy;

impl MoveStrategy for FirstEmptyStrategy {
    fn choose(&mut self, board: &Board) -> Option<(usize, usize)> {
        board.empty_cells().first().copied()
    }
}
