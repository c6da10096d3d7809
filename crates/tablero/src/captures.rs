//! Captured-piece tracking for the session.

use crate::icons::PieceIcon;
use crate::log::GameLog;
use tracing::{debug, info, instrument, warn};

/// Pieces removed from play, in capture order.
///
/// Each entry is the display identifier resolved for the captured piece,
/// or `None` when the reported token named no known piece. Unknown
/// captures still occupy a slot, so the list length always matches the
/// number of capture events.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedPieces {
    pieces: Vec<Option<PieceIcon>>,
}

impl CapturedPieces {
    /// Creates an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the capture named by `token`.
    ///
    /// Writes a capture message to `log` first, then appends the resolved
    /// display identifier to the captured list. The log write always
    /// precedes the append; the two lists are not updated atomically.
    #[instrument(skip(self, log))]
    pub fn capture(&mut self, log: &mut GameLog, token: &str) {
        log.log(format!("Captured piece: {token}"));

        let icon = PieceIcon::for_token(token);
        if icon.is_none() {
            warn!(token, "captured piece has no known icon");
        }
        self.pieces.push(icon);
        info!(token, total = self.pieces.len(), "piece captured");
    }

    /// Clears the captured list. The game log is left untouched.
    pub fn reset(&mut self) {
        debug!(discarded = self.pieces.len(), "captured pieces reset");
        self.pieces.clear();
    }

    /// Captured display identifiers, oldest first.
    pub fn pieces(&self) -> &[Option<PieceIcon>] {
        &self.pieces
    }

    /// Number of recorded captures.
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    /// Whether no capture has been recorded.
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }
}
