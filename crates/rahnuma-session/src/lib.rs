//! Session-scoped mutable state.
//!
//! Each user session owns one [`Session`] value; the harness passes it into
//! handlers explicitly. Nothing here is process-global, so concurrent
//! sessions stay isolated while sharing the read-only catalog.

mod chat;
mod saved;

pub use chat::{ChatLog, ChatMessage};
pub use saved::{RemoveOutcome, SaveOutcome, SavedPrograms};

/// One user's session state: saved programs plus the chat log.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub saved: SavedPrograms,
    pub chat: ChatLog,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }
}
