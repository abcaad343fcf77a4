//! Session struct and conversation management.

use tracing::debug;

use crate::history::History;
use crate::{Message, Role};

/// A conversation session: persona instruction plus bounded history.
pub struct Session {
    /// Retained user/assistant turns.
    pub(super) history: History,
    /// System instruction, always turn zero of a request.
    pub(super) persona: Message,
}

impl Session {
    /// Create a session keeping at most `max_history` user/assistant exchanges.
    /// Zero is treated as one.
    pub fn new(persona: impl Into<String>, max_history: usize) -> Self {
        Self {
            history: History::new(max_history),
            persona: Message::system(persona),
        }
    }

    /// Add a turn to the history, trimming the oldest turns past the cap.
    pub fn append(&mut self, role: Role, content: impl Into<String>) {
        self.history.push(Message::new(role, content));
    }

    /// The persona followed by the retained history, oldest first.
    pub fn context_window(&self) -> Vec<Message> {
        let mut msgs = Vec::with_capacity(self.history.len() + 1);
        msgs.push(self.persona.clone());
        msgs.extend(self.history.iter().cloned());
        msgs
    }

    /// Clear conversation history. The persona is kept.
    pub fn clear(&mut self) {
        debug!(dropped = self.history.len(), "history cleared");
        self.history.clear();
    }

    /// Owned copy of the history for export.
    pub fn snapshot(&self) -> Vec<Message> {
        self.history.snapshot()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn persona(&self) -> &Message {
        &self.persona
    }

    /// Number of messages in history.
    pub fn message_count(&self) -> usize {
        self.history.len()
    }
}
