//! Database-backed result sink for game sessions.

use tracing::warn;

use crate::db::{GameRepository, NewGameResult};
use crate::game::ResultSink;

/// Records finished games in the history database.
///
/// Recording is best-effort: a persistence failure is logged and
/// swallowed so the in-memory game is never aborted or corrupted by a
/// database problem.
#[derive(Debug, Clone)]
pub struct DbResultSink {
    repository: GameRepository,
}

impl DbResultSink {
    /// Creates a sink writing through the given repository.
    pub fn new(repository: GameRepository) -> Self {
        Self { repository }
    }
}

impl ResultSink for DbResultSink {
    fn record_result(&self, winner: &str, board_size: usize, move_count: u32) {
        let result = NewGameResult::new(
            winner.to_string(),
            board_size as i32,
            move_count as i32,
        );
        if let Err(e) = self.repository.record_result(result) {
            warn!(error = %e, "Failed to save game result, continuing without it");
        }
    }
}
