//! Tests for database repository operations.

use tempfile::NamedTempFile;

use gomoku::{GameRepository, NewGameResult};

/// Creates a temporary database file with schema applied, returns the file
/// handle (must stay in scope to keep the file alive) and a ready repository.
fn setup_test_db() -> (NamedTempFile, GameRepository) {
    let db_file = NamedTempFile::new().expect("Failed to create temp file");
    let db_path = db_file.path().to_str().expect("Invalid path").to_string();

    let repo = GameRepository::new(db_path);
    repo.initialize().expect("Initialization failed");
    (db_file, repo)
}

#[test]
fn test_initialize_is_idempotent() {
    let (_db, repo) = setup_test_db();
    repo.initialize().expect("Second initialization failed");
    assert!(repo.history().expect("Query failed").is_empty());
}

#[test]
fn test_record_result() {
    let (_db, repo) = setup_test_db();

    let stored = repo
        .record_result(NewGameResult::new("Human".to_string(), 7, 23))
        .expect("Record failed");

    assert!(*stored.id() > 0);
    assert_eq!(stored.winner(), "Human");
    assert_eq!(*stored.board_size(), 7);
    assert_eq!(*stored.move_count(), 23);
}

#[test]
fn test_history_empty_database() {
    let (_db, repo) = setup_test_db();
    assert!(repo.history().expect("Query failed").is_empty());
    assert!(repo.fetch_history().expect("Query failed").is_empty());
}

#[test]
fn test_history_most_recent_first() {
    let (_db, repo) = setup_test_db();

    for (winner, moves) in [("Human", 9), ("Computer", 14), ("Draw", 49)] {
        repo.record_result(NewGameResult::new(winner.to_string(), 7, moves))
            .expect("Record failed");
    }

    let history = repo.history().expect("Query failed");
    assert_eq!(history.len(), 3);
    // Inserted within the same second; id ordering breaks the tie.
    assert_eq!(history[0].winner(), "Draw");
    assert_eq!(history[1].winner(), "Computer");
    assert_eq!(history[2].winner(), "Human");
}

#[test]
fn test_fetch_history_formatting() {
    let (_db, repo) = setup_test_db();

    repo.record_result(NewGameResult::new("Computer".to_string(), 7, 14))
        .expect("Record failed");

    let entries = repo.fetch_history().expect("Query failed");
    assert_eq!(entries.len(), 1);
    assert!(
        entries[0].starts_with("Winner: Computer | Board: 7x7 | Moves: 14 | "),
        "unexpected entry format: {}",
        entries[0]
    );
}

#[test]
fn test_played_at_defaults_to_insertion_time() {
    let (_db, repo) = setup_test_db();

    let before = chrono::Utc::now().naive_utc() - chrono::Duration::seconds(5);
    let stored = repo
        .record_result(NewGameResult::new("Draw".to_string(), 4, 16))
        .expect("Record failed");
    let after = chrono::Utc::now().naive_utc() + chrono::Duration::seconds(5);

    assert!(*stored.played_at() >= before && *stored.played_at() <= after);
}
