//! Database persistence layer for the game history.

mod error;
mod models;
mod repository;
mod schema; // Diesel generated schema - internal use only
mod sink;

pub use error::DbError;
pub use models::{GameResult, NewGameResult};
pub use repository::GameRepository;
pub use sink::DbResultSink;
