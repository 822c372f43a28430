//! Console front end: menu loop, board rendering, and move input.
//!
//! Everything here is driver concern; the game core communicates only
//! through [`GameSession`] and the history queries.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use tracing::instrument;

use crate::db::GameRepository;
use crate::game::{Cell, GameSession, Player};

/// Runs the main menu loop until the player chooses to exit.
#[instrument(skip(session, repository))]
pub fn run(session: &mut GameSession, repository: &GameRepository) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print_menu();
        print!("Select an option: ");
        io::stdout().flush().context("flushing prompt")?;

        let Some(line) = lines.next() else {
            // Stdin closed; treat like choosing exit.
            println!();
            return Ok(());
        };
        let choice = line.context("reading menu input")?;

        match choice.trim() {
            "1" => play_game(session, &mut lines)?,
            "2" => show_history(repository),
            "3" => {
                println!("Thanks for playing!");
                return Ok(());
            }
            _ => println!("Invalid option. Please try again."),
        }
    }
}

fn print_menu() {
    println!();
    println!("=== Gomoku (Five in a Row) ===");
    println!("1. New game");
    println!("2. View history");
    println!("3. Exit");
}

/// Plays one game to completion, alternating human and computer turns.
fn play_game(
    session: &mut GameSession,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<()> {
    session.reset();
    println!("{}", render_board(session));

    while !session.is_game_over() {
        if session.current_player() == Player::Human {
            if !human_turn(session, lines)? {
                // Input ended mid-game; abandon without recording.
                println!();
                println!("Input closed, abandoning game.");
                return Ok(());
            }
        } else {
            session.make_computer_move();
            println!("{}", render_board(session));
        }
    }

    println!("Game Over!");
    match session.winner() {
        Some("Draw") | None => println!("It's a draw!"),
        Some(winner) => println!("Winner: {}", winner),
    }
    Ok(())
}

/// Prompts until the human enters a legal move. Returns `false` if
/// stdin is exhausted before a move is made.
fn human_turn(
    session: &mut GameSession,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<bool> {
    loop {
        print!("Enter row and column (e.g., '3 4'): ");
        io::stdout().flush().context("flushing prompt")?;

        let Some(line) = lines.next() else {
            return Ok(false);
        };
        let input = line.context("reading move input")?;

        match parse_move(&input) {
            Some((row, col)) => {
                if session.make_move(row, col) {
                    println!("{}", render_board(session));
                    return Ok(true);
                }
                println!("Invalid move. Try again.");
            }
            None => println!("Please enter two numbers separated by space."),
        }
    }
}

/// Parses a 1-based "row col" pair into 0-based coordinates.
///
/// Returns `None` for anything but exactly two positive integers;
/// range checking against the board is left to the session.
pub fn parse_move(input: &str) -> Option<(usize, usize)> {
    let mut tokens = input.split_whitespace();
    let row: usize = tokens.next()?.parse().ok()?;
    let col: usize = tokens.next()?.parse().ok()?;
    if tokens.next().is_some() || row == 0 || col == 0 {
        return None;
    }
    Some((row - 1, col - 1))
}

/// Renders the board with 1-based row and column headers.
pub fn render_board(session: &GameSession) -> String {
    let size = session.board_size();
    let mut out = String::new();

    out.push_str("   ");
    for col in 1..=size {
        out.push_str(&format!("{:2} ", col));
    }
    out.push('\n');

    for row in 0..size {
        out.push_str(&format!("{:2} ", row + 1));
        for col in 0..size {
            let glyph = match session.cell(row, col) {
                Cell::Empty => '.',
                Cell::Occupied(player) => player.glyph(),
            };
            out.push_str(&format!(" {} ", glyph));
        }
        out.push('\n');
    }
    out
}

/// Prints the recorded game history, most recent first.
pub fn show_history(repository: &GameRepository) {
    println!();
    println!("=== Game History ===");
    match repository.fetch_history() {
        Ok(entries) if entries.is_empty() => println!("No games recorded yet."),
        Ok(entries) => {
            for entry in entries {
                println!("{}", entry);
            }
        }
        Err(e) => println!("Could not load history: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::NullSink;

    #[test]
    fn test_parse_move_valid() {
        assert_eq!(parse_move("3 4"), Some((2, 3)));
        assert_eq!(parse_move("  1   1  "), Some((0, 0)));
        assert_eq!(parse_move("7 7"), Some((6, 6)));
    }

    #[test]
    fn test_parse_move_rejects_garbage() {
        assert_eq!(parse_move(""), None);
        assert_eq!(parse_move("3"), None);
        assert_eq!(parse_move("3 4 5"), None);
        assert_eq!(parse_move("a b"), None);
        assert_eq!(parse_move("3, 4"), None);
        // Zero and negatives are not valid 1-based coordinates.
        assert_eq!(parse_move("0 4"), None);
        assert_eq!(parse_move("-1 4"), None);
    }

    #[test]
    fn test_render_board_shows_marks() {
        let mut session = GameSession::new(7, Box::new(NullSink));
        session.make_move(0, 0);
        let rendered = render_board(&session);
        let first_row = rendered.lines().nth(1).expect("board has rows");
        assert!(first_row.contains('X'));
        assert!(!rendered.contains('O'));
        // 1-based headers.
        assert!(rendered.lines().next().expect("header").contains('7'));
    }
}
