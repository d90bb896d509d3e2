//! Transcript - the append-only per-session message log.

use serde::{Deserialize, Serialize};

use crate::message::ChatMessage;

/// Ordered log of exchanged messages for one session.
///
/// Append-only: no removal, edit, or reordering operation exists. The log
/// lives for the session and is discarded (not persisted) on teardown.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message and return the new length.
    ///
    /// The returned length doubles as the "just appended" signal the
    /// presentation layer uses to scroll to the latest message.
    pub fn append(&mut self, message: ChatMessage) -> usize {
        self.messages.push(message);
        self.messages.len()
    }

    /// The full ordered sequence, for rendering. Read-only to consumers.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
