//! Display identifiers for captured and rendered pieces.

use crate::types::PieceKind;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::instrument;

/// Stable display identifier for one piece kind.
///
/// One variant per piece icon the UI can draw. Identifiers are distinct
/// and never change between calls, so collaborators can key asset
/// selection on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
#[serde(rename_all = "lowercase")]
pub enum PieceIcon {
    /// Pawn icon.
    Pawn,
    /// Rook icon.
    Rook,
    /// Knight icon.
    Knight,
    /// Bishop icon.
    Bishop,
    /// Queen icon.
    Queen,
    /// King icon.
    King,
}

impl PieceIcon {
    /// Resolves the display identifier for a piece-name token.
    ///
    /// Exact match over the six known tokens; an unrecognized token
    /// resolves to `None`. There is no pawn fallback for unknown input.
    #[instrument]
    pub fn for_token(token: &str) -> Option<Self> {
        PieceKind::from_token(token).map(Self::from)
    }

    /// Unicode glyph for this icon.
    #[instrument]
    pub fn glyph(self) -> char {
        match self {
            PieceIcon::Pawn => '♟',
            PieceIcon::Rook => '♜',
            PieceIcon::Knight => '♞',
            PieceIcon::Bishop => '♝',
            PieceIcon::Queen => '♛',
            PieceIcon::King => '♚',
        }
    }
}

impl From<PieceKind> for PieceIcon {
    fn from(kind: PieceKind) -> Self {
        match kind {
            PieceKind::Pawn => PieceIcon::Pawn,
            PieceKind::Rook => PieceIcon::Rook,
            PieceKind::Knight => PieceIcon::Knight,
            PieceKind::Bishop => PieceIcon::Bishop,
            PieceKind::Queen => PieceIcon::Queen,
            PieceKind::King => PieceIcon::King,
        }
    }
}

impl fmt::Display for PieceIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
