//! The catalog of predefined board layouts.

use crate::types::{Board, BoardId, Difficulty, PieceKind, Position};
use tracing::{debug, instrument};

/// Immutable catalog of predefined boards.
///
/// Populated once at construction and read-only afterwards. Lookups key
/// on the (id, difficulty) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardCatalog {
    boards: Vec<Board>,
}

impl BoardCatalog {
    /// Creates a catalog holding the given boards.
    ///
    /// Boards are taken as-is: entries sharing an (id, difficulty) pair
    /// are allowed, and [`BoardCatalog::get`] reports such pairs as
    /// absent.
    pub fn new(boards: Vec<Board>) -> Self {
        Self { boards }
    }

    /// The built-in two-board catalog.
    #[instrument]
    pub fn standard() -> Self {
        use PieceKind::{Bishop, Knight, Pawn, Rook};

        Self::new(vec![
            Board::new(
                1,
                Difficulty::Intermediate,
                vec![
                    Position::new(1, 1, Rook),
                    Position::new(2, 2, Bishop),
                    Position::new(3, 3, Rook),
                    Position::new(3, 4, Knight),
                    Position::new(4, 1, Knight),
                ],
            ),
            Board::new(
                2,
                Difficulty::Intermediate,
                vec![
                    Position::new(1, 2, Pawn),
                    Position::new(2, 1, Rook),
                    Position::new(2, 2, Knight),
                    Position::new(2, 4, Rook),
                    Position::new(4, 3, Pawn),
                ],
            ),
        ])
    }

    /// All boards in the catalog.
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    /// Looks up the board with the given id and difficulty.
    ///
    /// Returns the entry only when exactly one board matches. Zero
    /// matches and multiple matches are both `None`; an ambiguous pair is
    /// as unanswerable as a missing one.
    #[instrument(skip(self), fields(difficulty = %difficulty))]
    pub fn get(&self, id: BoardId, difficulty: Difficulty) -> Option<&Board> {
        let mut matches = self
            .boards
            .iter()
            .filter(|board| board.id() == id && board.difficulty() == difficulty);

        match (matches.next(), matches.next()) {
            (Some(board), None) => Some(board),
            (Some(_), Some(_)) => {
                debug!(id, "ambiguous catalog entry");
                None
            }
            (None, _) => {
                debug!(id, "no such board in catalog");
                None
            }
        }
    }

    /// The board handed out when the caller does not pick one.
    ///
    /// Always resolves board 2 at intermediate difficulty; repeated calls
    /// never vary the result.
    #[instrument(skip(self))]
    pub fn random_board(&self) -> Option<&Board> {
        self.get(2, Difficulty::Intermediate)
    }
}

impl Default for BoardCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
