//! Board mechanics: grid state, move placement, and line detection.
//!
//! The board knows nothing about turns; it validates and applies single
//! placements and answers win/full queries. Turn sequencing lives in
//! [`super::session::GameSession`].

use super::types::{Cell, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Default side length of the square board.
pub const DEFAULT_BOARD_SIZE: usize = 7;

/// Number of consecutive marks required to win.
pub const WIN_LENGTH: usize = 5;

/// Line directions checked from a just-played cell. Each direction is
/// walked both forward and backward, so four vectors cover all eight rays.
const DIRECTIONS: [(isize, isize); 4] = [
    (0, 1),  // horizontal
    (1, 0),  // vertical
    (1, 1),  // diagonal down-right
    (1, -1), // diagonal down-left
];

/// Square Gomoku board of side length N, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
    occupied: usize,
}

impl Board {
    /// Creates an empty board with the given side length.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero; a zero-sided board has no legal state.
    #[instrument]
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "board size must be positive");
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
            occupied: 0,
        }
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Cell contents at the given coordinates.
    ///
    /// Out-of-range coordinates read as [`Cell::Empty`]; callers that
    /// stay in range never observe the difference.
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        if row < self.size && col < self.size {
            self.cells[row * self.size + col]
        } else {
            Cell::Empty
        }
    }

    /// True once every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.occupied == self.size * self.size
    }

    /// Attempts to place a mark for `player` at the given coordinates.
    ///
    /// Returns `false` without side effects when the coordinates are out
    /// of range or the cell is already occupied. Rejection is a normal
    /// outcome the caller must check, not an error.
    #[instrument(skip(self))]
    pub fn place(&mut self, row: usize, col: usize, player: Player) -> bool {
        if row >= self.size || col >= self.size {
            return false;
        }
        let idx = row * self.size + col;
        if self.cells[idx] != Cell::Empty {
            return false;
        }
        self.cells[idx] = Cell::Occupied(player);
        self.occupied += 1;
        true
    }

    /// Checks whether the mark just placed at `(row, col)` completes a
    /// run of at least [`WIN_LENGTH`] for `player`.
    ///
    /// Only lines through the given cell are examined, so this must be
    /// called after every placement with that placement's coordinates;
    /// it is not a full-board scan.
    #[instrument(skip(self))]
    pub fn has_winning_line_through(&self, row: usize, col: usize, player: Player) -> bool {
        DIRECTIONS.iter().any(|&(dr, dc)| {
            let run = 1
                + self.count_in_direction(row, col, dr, dc, player)
                + self.count_in_direction(row, col, -dr, -dc, player);
            run >= WIN_LENGTH
        })
    }

    /// Counts consecutive `player` marks walking from `(row, col)` in one
    /// direction, excluding the starting cell itself.
    fn count_in_direction(
        &self,
        row: usize,
        col: usize,
        dr: isize,
        dc: isize,
        player: Player,
    ) -> usize {
        let mut count = 0;
        let mut r = row as isize + dr;
        let mut c = col as isize + dc;
        let size = self.size as isize;
        while r >= 0
            && r < size
            && c >= 0
            && c < size
            && self.cells[(r * size + c) as usize] == Cell::Occupied(player)
        {
            count += 1;
            r += dr;
            c += dc;
        }
        count
    }

    /// All currently empty coordinates in row-major order.
    ///
    /// Basis of the computer opponent: a uniform pick from this list
    /// always terminates, unlike retrying random draws.
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Empty)
            .map(|(idx, _)| (idx / self.size, idx % self.size))
            .collect()
    }

    /// Resets every cell to empty and the occupied count to zero,
    /// reusing the existing allocation.
    #[instrument(skip(self))]
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
        self.occupied = 0;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(7);
        for row in 0..7 {
            for col in 0..7 {
                assert_eq!(board.cell(row, col), Cell::Empty);
            }
        }
        assert!(!board.is_full());
        assert_eq!(board.empty_cells().len(), 49);
    }

    #[test]
    #[should_panic(expected = "board size must be positive")]
    fn test_zero_size_rejected() {
        Board::new(0);
    }

    #[test]
    fn test_place_and_read_back() {
        let mut board = Board::new(7);
        assert!(board.place(3, 4, Player::Human));
        assert_eq!(board.cell(3, 4), Cell::Occupied(Player::Human));
        assert_eq!(board.empty_cells().len(), 48);
    }

    #[test]
    fn test_place_rejects_out_of_range() {
        let mut board = Board::new(7);
        assert!(!board.place(7, 0, Player::Human));
        assert!(!board.place(0, 7, Player::Human));
        assert!(!board.place(100, 100, Player::Human));
        assert_eq!(board.empty_cells().len(), 49);
    }

    #[test]
    fn test_place_rejects_occupied_cell() {
        let mut board = Board::new(7);
        assert!(board.place(2, 2, Player::Human));
        assert!(!board.place(2, 2, Player::Computer));
        // Rejected placement did not overwrite the mark.
        assert_eq!(board.cell(2, 2), Cell::Occupied(Player::Human));
    }

    #[test]
    fn test_horizontal_win_at_five() {
        let mut board = Board::new(7);
        for col in 0..WIN_LENGTH {
            assert!(board.place(0, col, Player::Human));
            let expect_win = col == WIN_LENGTH - 1;
            assert_eq!(
                board.has_winning_line_through(0, col, Player::Human),
                expect_win,
                "unexpected win result after {} marks",
                col + 1
            );
        }
    }

    #[test]
    fn test_vertical_win() {
        let mut board = Board::new(7);
        for row in 0..5 {
            board.place(row, 3, Player::Computer);
        }
        assert!(board.has_winning_line_through(4, 3, Player::Computer));
        assert!(board.has_winning_line_through(0, 3, Player::Computer));
        assert!(!board.has_winning_line_through(4, 3, Player::Human));
    }

    #[test]
    fn test_diagonal_down_right_win() {
        let mut board = Board::new(7);
        for i in 0..5 {
            board.place(i, i, Player::Human);
        }
        assert!(board.has_winning_line_through(2, 2, Player::Human));
    }

    #[test]
    fn test_diagonal_down_left_win() {
        let mut board = Board::new(7);
        for i in 0..5 {
            board.place(i, 6 - i, Player::Human);
        }
        assert!(board.has_winning_line_through(0, 6, Player::Human));
        assert!(board.has_winning_line_through(4, 2, Player::Human));
    }

    #[test]
    fn test_win_detected_from_middle_of_run() {
        let mut board = Board::new(7);
        // Place the winning mark in the middle: _ X X . X X _
        for col in [1, 2, 4, 5] {
            board.place(0, col, Player::Human);
        }
        assert!(board.place(0, 3, Player::Human));
        assert!(board.has_winning_line_through(0, 3, Player::Human));
    }

    #[test]
    fn test_interrupted_run_is_not_a_win() {
        let mut board = Board::new(7);
        for col in [0, 1, 2, 3] {
            board.place(0, col, Player::Human);
        }
        board.place(0, 4, Player::Computer);
        board.place(0, 5, Player::Human);
        assert!(!board.has_winning_line_through(0, 3, Player::Human));
        assert!(!board.has_winning_line_through(0, 5, Player::Human));
    }

    #[test]
    fn test_small_board_can_never_win() {
        // A 4x4 board cannot hold a run of five in any direction.
        let mut board = Board::new(4);
        for row in 0..4 {
            for col in 0..4 {
                board.place(row, col, Player::Human);
                assert!(!board.has_winning_line_through(row, col, Player::Human));
            }
        }
        assert!(board.is_full());
    }

    #[test]
    fn test_full_board_detection() {
        let mut board = Board::new(3);
        for row in 0..3 {
            for col in 0..3 {
                assert!(!board.is_full());
                board.place(row, col, Player::Human);
            }
        }
        assert!(board.is_full());
        assert!(board.empty_cells().is_empty());
    }

    #[test]
    fn test_clear_restores_empty_board() {
        let mut board = Board::new(7);
        board.place(0, 0, Player::Human);
        board.place(6, 6, Player::Computer);
        board.clear();
        assert_eq!(board.cell(0, 0), Cell::Empty);
        assert_eq!(board.cell(6, 6), Cell::Empty);
        assert!(!board.is_full());
        assert_eq!(board.empty_cells().len(), 49);
    }

    #[test]
    fn test_out_of_range_cell_reads_empty() {
        let board = Board::new(7);
        assert_eq!(board.cell(7, 7), Cell::Empty);
        assert_eq!(board.cell(usize::MAX, 0), Cell::Empty);
    }
}
