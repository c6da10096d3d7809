//! Tablero: client-side state layer for a chess puzzle UI.
//!
//! The crate tracks the handful of state a chess puzzle screen needs:
//! which predefined board is on display, which pieces have been captured,
//! and a log of game messages. There is no rule engine and nothing is
//! persisted; every lookup reports failure as `None` and leaves the
//! caller to decide what absence means on screen.
//!
//! # Architecture
//!
//! - **Catalog**: immutable registry of predefined boards keyed by
//!   (id, difficulty)
//! - **Session**: the active board plus the selectors that picked it
//! - **Captures**: display identifiers of pieces removed from play
//! - **Log**: append-only list of human-readable game messages
//! - **Context**: per-run owner wiring the four together
//!
//! # Example
//!
//! ```
//! use tablero::{GameContext, PieceKind};
//!
//! let mut ctx = GameContext::new();
//! ctx.session_mut().set_initial_board();
//! assert_eq!(ctx.session().piece_at(2, 2), Some(PieceKind::Bishop));
//!
//! ctx.session_mut().set_next_board();
//! assert_eq!(ctx.session().piece_at(2, 2), Some(PieceKind::Knight));
//!
//! ctx.capture_piece("queen");
//! assert_eq!(ctx.log().messages(), ["Captured piece: queen"]);
//! assert_eq!(ctx.captures().len(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod captures;
mod catalog;
mod context;
mod icons;
mod log;
mod session;
mod types;

// Crate-level exports - captured-piece tracking
pub use captures::CapturedPieces;

// Crate-level exports - board catalog
pub use catalog::BoardCatalog;

// Crate-level exports - per-run state context
pub use context::GameContext;

// Crate-level exports - piece display identifiers
pub use icons::PieceIcon;

// Crate-level exports - game message log
pub use log::GameLog;

// Crate-level exports - session state
pub use session::GameSession;

// Crate-level exports - domain types
pub use types::{Board, BoardId, Difficulty, PieceKind, Position};
