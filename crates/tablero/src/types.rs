//! Core domain types for the chess-UI state layer.

use derive_new::new;
use serde::{Deserialize, Serialize};

/// Stable identifier for a catalog board.
pub type BoardId = u32;

/// The closed set of piece kinds a board square can hold.
///
/// Each kind has a lowercase wire token; the rook's token is spelled
/// `rock` in the board data, and only that spelling parses.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PieceKind {
    /// Pawn (`pawn`).
    Pawn,
    /// Rook (`rock`).
    #[serde(rename = "rock")]
    #[strum(serialize = "rock")]
    Rook,
    /// Knight (`knight`).
    Knight,
    /// Bishop (`bishop`).
    Bishop,
    /// Queen (`queen`).
    Queen,
    /// King (`king`).
    King,
}

impl PieceKind {
    /// Parses a piece-name token.
    ///
    /// Exact match over the six known tokens; anything else is `None`.
    pub fn from_token(token: &str) -> Option<Self> {
        token.parse().ok()
    }
}

/// Difficulty label attached to each catalog board.
///
/// Part of the board lookup key, not a gameplay parameter.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Difficulty {
    /// Easiest layouts.
    Easy,
    /// Default difficulty; both built-in boards sit here.
    #[default]
    Intermediate,
    /// Harder layouts.
    Hard,
    /// Hardest layouts.
    Expert,
}

/// A single occupied square within a board layout.
///
/// Nothing forces (row, column) pairs to be unique within a board;
/// position queries treat a duplicated square as unanswerable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Position {
    /// Row index on the board grid.
    row: u8,
    /// Column index on the board grid.
    column: u8,
    /// Piece standing on the square.
    piece: PieceKind,
}

impl Position {
    /// Row index on the board grid.
    pub fn row(&self) -> u8 {
        self.row
    }

    /// Column index on the board grid.
    pub fn column(&self) -> u8 {
        self.column
    }

    /// Piece standing on the square.
    pub fn piece(&self) -> PieceKind {
        self.piece
    }
}

/// A predefined board layout, tagged by id and difficulty.
///
/// Boards are catalog data: built once, never mutated at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct Board {
    /// Stable identifier within the catalog.
    id: BoardId,
    /// Difficulty classification.
    difficulty: Difficulty,
    /// Occupied squares, in no particular order.
    positions: Vec<Position>,
}

impl Board {
    /// Stable identifier within the catalog.
    pub fn id(&self) -> BoardId {
        self.id
    }

    /// Difficulty classification.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Occupied squares, in no particular order.
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }
}
