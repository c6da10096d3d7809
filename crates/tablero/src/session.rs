//! Session state: active board selection and position queries.

use crate::catalog::BoardCatalog;
use crate::types::{Board, BoardId, Difficulty, PieceKind};
use tracing::{debug, info, instrument};

/// Tracks which catalog board is current and the selectors that pick it.
///
/// The session owns its catalog. Writing a selector never re-resolves the
/// current board; resolution happens only in
/// [`GameSession::set_initial_board`] and [`GameSession::set_next_board`].
/// A selector pair that matches no catalog entry leaves the current board
/// absent, and callers decide what to do with the absence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    catalog: BoardCatalog,
    board_number: BoardId,
    difficulty: Difficulty,
    current_board: Option<Board>,
}

impl GameSession {
    /// Creates a session over the given catalog.
    ///
    /// Selectors start at board 1, intermediate difficulty; no board is
    /// loaded until [`GameSession::set_initial_board`] runs.
    #[instrument(skip(catalog), fields(boards = catalog.boards().len()))]
    pub fn new(catalog: BoardCatalog) -> Self {
        Self {
            catalog,
            board_number: 1,
            difficulty: Difficulty::default(),
            current_board: None,
        }
    }

    /// Catalog this session selects from.
    pub fn catalog(&self) -> &BoardCatalog {
        &self.catalog
    }

    /// Board-number selector.
    pub fn board_number(&self) -> BoardId {
        self.board_number
    }

    /// Sets the board-number selector without touching the current board.
    pub fn set_board_number(&mut self, board_number: BoardId) {
        self.board_number = board_number;
    }

    /// Difficulty selector.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Sets the difficulty selector without touching the current board.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    /// The board resolved by the most recent load, if any.
    pub fn current_board(&self) -> Option<&Board> {
        self.current_board.as_ref()
    }

    /// Loads the board named by the current selectors.
    ///
    /// Stores the lookup result unconditionally: selectors that resolve
    /// to no catalog entry overwrite the current board with absence.
    #[instrument(skip(self), fields(board_number = self.board_number, difficulty = %self.difficulty))]
    pub fn set_initial_board(&mut self) {
        self.current_board = self.catalog.get(self.board_number, self.difficulty).cloned();

        match &self.current_board {
            Some(board) => info!(id = board.id(), "board loaded"),
            None => debug!("selectors resolve to no board"),
        }
    }

    /// Jumps the session to board 2 and loads it.
    ///
    /// The transition is a literal jump to the second catalog board, not
    /// an increment over the current selection.
    #[instrument(skip(self))]
    pub fn set_next_board(&mut self) {
        self.board_number = 2;
        self.set_initial_board();
    }

    /// Piece standing at (row, column) on the current board.
    ///
    /// Answers only when exactly one position matches. Zero matches and
    /// several matches are both `None`, as is a missing current board.
    #[instrument(skip(self))]
    pub fn piece_at(&self, row: u8, column: u8) -> Option<PieceKind> {
        let board = self.current_board.as_ref()?;
        let mut matches = board
            .positions()
            .iter()
            .filter(|position| position.row() == row && position.column() == column);

        match (matches.next(), matches.next()) {
            (Some(position), None) => Some(position.piece()),
            _ => None,
        }
    }
}

impl Default for GameSession {
    /// A session over the standard catalog.
    fn default() -> Self {
        Self::new(BoardCatalog::standard())
    }
}
