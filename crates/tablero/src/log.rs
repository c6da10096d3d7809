//! Session log of human-readable game messages.

use tracing::debug;

/// Append-only list of game messages shown to the player.
///
/// The log is plain data with no levels or filtering; message content is
/// caller-supplied. Diagnostics go through `tracing` separately.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameLog {
    messages: Vec<String>,
}

impl GameLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message to the log.
    pub fn log(&mut self, message: impl Into<String>) {
        let message = message.into();
        debug!(%message, "game log entry");
        self.messages.push(message);
    }

    /// Clears every message.
    pub fn reset(&mut self) {
        debug!(discarded = self.messages.len(), "game log reset");
        self.messages.clear();
    }

    /// Messages in append order.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Number of messages held.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the log holds no messages.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
