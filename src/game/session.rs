//! Turn sequencing and terminal-state handling for one game.

use super::board::Board;
use super::opponent::{MoveStrategy, RandomStrategy};
use super::types::{Cell, GameStatus, Player};
use tracing::{debug, info, instrument};

/// Records completed-game outcomes.
///
/// Recording is best-effort: implementations log their own failures
/// and never surface them to the session, which proceeds as if the
/// save succeeded.
pub trait ResultSink {
    /// Records one finished game.
    fn record_result(&self, winner: &str, board_size: usize, move_count: u32);
}

/// Sink that discards results, for sessions played without persistence.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl ResultSink for NullSink {
    fn record_result(&self, _winner: &str, _board_size: usize, _move_count: u32) {}
}

/// One human-vs-computer game: board, turn order, and outcome.
///
/// The human moves first. Once the game reaches a terminal state no
/// further moves are accepted until [`reset`](GameSession::reset).
pub struct GameSession {
    board: Board,
    current_player: Player,
    status: GameStatus,
    move_count: u32,
    strategy: Box<dyn MoveStrategy>,
    sink: Box<dyn ResultSink>,
}

impl GameSession {
    /// Creates a session on a fresh `size` x `size` board with a
    /// uniform-random computer opponent.
    #[instrument(skip(sink))]
    pub fn new(size: usize, sink: Box<dyn ResultSink>) -> Self {
        Self::with_strategy(size, sink, Box::new(RandomStrategy::new()))
    }

    /// Creates a session with an explicit opponent strategy.
    pub fn with_strategy(
        size: usize,
        sink: Box<dyn ResultSink>,
        strategy: Box<dyn MoveStrategy>,
    ) -> Self {
        Self {
            board: Board::new(size),
            current_player: Player::Human,
            status: GameStatus::InProgress,
            move_count: 0,
            strategy,
            sink,
        }
    }

    /// Attempts a move for the current player.
    ///
    /// Returns `false` without side effects when the game is already
    /// over or the board rejects the placement (out of range or
    /// occupied). On success the move is counted, terminal conditions
    /// are checked, and the turn passes to the opponent if the game
    /// continues.
    #[instrument(skip(self), fields(player = ?self.current_player))]
    pub fn make_move(&mut self, row: usize, col: usize) -> bool {
        if self.status.is_terminal() {
            debug!("move rejected: game already over");
            return false;
        }
        if !self.board.place(row, col, self.current_player) {
            debug!("move rejected by board");
            return false;
        }
        self.finish_placement(row, col);
        true
    }

    /// Plays the computer's turn.
    ///
    /// No-op when the game is already over or no empty cell remains.
    /// The strategy picks among the currently empty cells, so a single
    /// pick always suffices. A non-full board always yields a cell,
    /// and a full board is only reachable through a placement that
    /// already declared the draw, so the session can never be left
    /// stuck in progress.
    #[instrument(skip(self))]
    pub fn make_computer_move(&mut self) {
        if self.status.is_terminal() {
            return;
        }
        let Some((row, col)) = self.strategy.choose(&self.board) else {
            debug!("no empty cells available for computer move");
            return;
        };
        // The strategy only returns empty in-range cells.
        let placed = self.board.place(row, col, Player::Computer);
        debug_assert!(placed, "strategy chose an illegal cell");
        self.current_player = Player::Computer;
        self.finish_placement(row, col);
    }

    /// Shared post-placement logic: count the move, detect win or
    /// draw at the placement coordinates, otherwise flip the turn.
    fn finish_placement(&mut self, row: usize, col: usize) {
        self.move_count += 1;
        let player = self.current_player;
        if self.board.has_winning_line_through(row, col, player) {
            info!(winner = player.label(), moves = self.move_count, "game won");
            self.status = GameStatus::Won(player);
            self.record_outcome();
        } else if self.board.is_full() {
            info!(moves = self.move_count, "game drawn");
            self.status = GameStatus::Draw;
            self.record_outcome();
        } else {
            self.current_player = player.opponent();
        }
    }

    /// Reports the terminal outcome to the result sink.
    fn record_outcome(&self) {
        if let Some(label) = self.winner() {
            self.sink
                .record_result(label, self.board.size(), self.move_count);
        }
    }

    /// True once the game has ended in a win or draw.
    pub fn is_game_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Winner label once terminal: the winning player's label, or
    /// `"Draw"`. `None` while the game is in progress.
    pub fn winner(&self) -> Option<&'static str> {
        match self.status {
            GameStatus::InProgress => None,
            GameStatus::Won(player) => Some(player.label()),
            GameStatus::Draw => Some("Draw"),
        }
    }

    /// Player whose turn it is.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Cell contents at the given coordinates.
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.board.cell(row, col)
    }

    /// Side length of the board.
    pub fn board_size(&self) -> usize {
        self.board.size()
    }

    /// Number of successful placements this game.
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Current game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Starts a new game on the same session: empty board, human to
    /// move, no winner, zero moves.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.clear();
        self.current_player = Player::Human;
        self.status = GameStatus::InProgress;
        self.move_count = 0;
    }
}

impl std::fmt::Debug for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("board", &self.board)
            .field("current_player", &self.current_player)
            .field("status", &self.status)
            .field("move_count", &self.move_count)
            .finish_non_exhaustive()
    }
}
