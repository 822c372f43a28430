//! Database repository for the persistent game history.

use diesel::prelude::*;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::{debug, info, instrument};

use crate::db::{DbError, GameResult, NewGameResult, schema};

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Repository for recording and querying completed games.
///
/// Holds only the database path; a connection is established per
/// operation, which is plenty for a single synchronous game loop.
#[derive(Debug, Clone)]
pub struct GameRepository {
    db_path: String,
}

impl GameRepository {
    /// Creates a repository for the database at the given path.
    ///
    /// Use `":memory:"` for an in-memory database (useful for tests).
    #[instrument(skip(db_path))]
    pub fn new(db_path: impl Into<String>) -> Self {
        let db_path = db_path.into();
        info!(path = %db_path, "Creating GameRepository");
        Self { db_path }
    }

    /// Runs pending migrations, creating the history table on first use.
    ///
    /// Explicit process-wide setup: the application entry point calls
    /// this once before any game session is constructed. The game core
    /// never triggers it implicitly.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the database cannot be opened or a
    /// migration fails.
    #[instrument(skip(self))]
    pub fn initialize(&self) -> Result<(), DbError> {
        let mut conn = self.connection()?;
        conn.run_pending_migrations(MIGRATIONS)
            .map_err(|e| DbError::new(format!("Migration failed: {}", e)))?;
        info!(path = %self.db_path, "Database initialized");
        Ok(())
    }

    /// Establishes a database connection.
    #[instrument(skip(self))]
    fn connection(&self) -> Result<SqliteConnection, DbError> {
        debug!(path = %self.db_path, "Establishing connection");
        SqliteConnection::establish(&self.db_path)
            .map_err(|e| DbError::new(format!("Failed to connect to '{}': {}", self.db_path, e)))
    }

    /// Records a completed game.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self, result), fields(winner = %result.winner(), moves = result.move_count()))]
    pub fn record_result(&self, result: NewGameResult) -> Result<GameResult, DbError> {
        debug!("Recording game result");
        let mut conn = self.connection()?;

        let stored = diesel::insert_into(schema::game_results::table)
            .values(&result)
            .returning(GameResult::as_returning())
            .get_result(&mut conn)?;

        info!(
            result_id = stored.id(),
            winner = %stored.winner(),
            moves = stored.move_count(),
            "Game result recorded"
        );
        Ok(stored)
    }

    /// Loads all completed games, most recent first.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn history(&self) -> Result<Vec<GameResult>, DbError> {
        debug!("Loading game history");
        let mut conn = self.connection()?;

        let results = schema::game_results::table
            .order(schema::game_results::played_at.desc())
            .then_order_by(schema::game_results::id.desc())
            .load::<GameResult>(&mut conn)?;

        info!(count = results.len(), "Game history loaded");
        Ok(results)
    }

    /// Loads the game history as display-ready lines, most recent first.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn fetch_history(&self) -> Result<Vec<String>, DbError> {
        Ok(self.history()?.iter().map(GameResult::summary).collect())
    }
}
