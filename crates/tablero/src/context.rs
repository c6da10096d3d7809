//! Per-run owner of the session state objects.

use crate::captures::CapturedPieces;
use crate::catalog::BoardCatalog;
use crate::log::GameLog;
use crate::session::GameSession;
use derive_getters::Getters;
use tracing::instrument;

/// Owns the state one application run (or one test) works against.
///
/// UI collaborators hold a single `GameContext` and reach the session,
/// message log, and captured-piece list through it. Nothing in the crate
/// lives in module-level state, so contexts are independent of each
/// other.
#[derive(Debug, Clone, Default, Getters)]
pub struct GameContext {
    /// Active board selection and position queries.
    session: GameSession,
    /// Human-readable game messages.
    log: GameLog,
    /// Pieces removed from play.
    captures: CapturedPieces,
}

impl GameContext {
    /// Creates a context over the standard catalog.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a context over the given catalog.
    #[instrument(skip(catalog), fields(boards = catalog.boards().len()))]
    pub fn with_catalog(catalog: BoardCatalog) -> Self {
        Self {
            session: GameSession::new(catalog),
            log: GameLog::new(),
            captures: CapturedPieces::new(),
        }
    }

    /// Mutable access to the session.
    pub fn session_mut(&mut self) -> &mut GameSession {
        &mut self.session
    }

    /// Mutable access to the message log.
    pub fn log_mut(&mut self) -> &mut GameLog {
        &mut self.log
    }

    /// Mutable access to the captured-piece list.
    pub fn captures_mut(&mut self) -> &mut CapturedPieces {
        &mut self.captures
    }

    /// Records a capture: one log entry, then one captured-list entry.
    pub fn capture_piece(&mut self, token: &str) {
        self.captures.capture(&mut self.log, token);
    }
}
