//! Database models for the game history.

use chrono::NaiveDateTime;
use derive_getters::Getters;
use derive_new::new;
use diesel::prelude::*;

use crate::db::schema;

/// A completed game as stored in the history table.
#[derive(Debug, Clone, Queryable, Identifiable, Selectable, Getters)]
#[diesel(table_name = schema::game_results)]
pub struct GameResult {
    id: i32,
    winner: String,
    board_size: i32,
    move_count: i32,
    played_at: NaiveDateTime,
}

impl GameResult {
    /// Renders the history line shown to the player.
    pub fn summary(&self) -> String {
        format!(
            "Winner: {} | Board: {}x{} | Moves: {} | {}",
            self.winner,
            self.board_size,
            self.board_size,
            self.move_count,
            self.played_at.format("%Y-%m-%d %H:%M:%S"),
        )
    }
}

/// Insertable model for recording a newly completed game.
///
/// `played_at` is filled in by the database at insertion time.
#[derive(Debug, Clone, Insertable, new, Getters)]
#[diesel(table_name = schema::game_results)]
pub struct NewGameResult {
    winner: String,
    board_size: i32,
    move_count: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_format() {
        let played_at = NaiveDateTime::parse_from_str("2025-11-24 10:30:00", "%Y-%m-%d %H:%M:%S")
            .expect("valid timestamp");
        let result = GameResult {
            id: 1,
            winner: "Human".to_string(),
            board_size: 7,
            move_count: 23,
            played_at,
        };
        assert_eq!(
            result.summary(),
            "Winner: Human | Board: 7x7 | Moves: 23 | 2025-11-24 10:30:00"
        );
    }
}
