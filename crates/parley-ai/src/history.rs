//! Bounded conversation history.
//!
//! Holds at most `2 × max_exchanges` turns. Appending past the cap drops
//! the oldest turns first so the most recent exchanges survive.

use std::collections::VecDeque;

use tracing::trace;

use crate::Message;

#[derive(Debug, Clone)]
pub struct History {
    turns: VecDeque<Message>,
    capacity: usize,
}

impl History {
    /// Create a history that retains `max_exchanges` user/assistant pairs.
    /// At least one exchange is always kept, so the turn just sent survives.
    pub fn new(max_exchanges: usize) -> Self {
        let capacity = max_exchanges.max(1).saturating_mul(2);
        Self {
            turns: VecDeque::with_capacity(capacity.min(64)),
            capacity,
        }
    }

    /// Append a turn, then trim to the cap.
    pub fn push(&mut self, message: Message) {
        self.turns.push_back(message);
        self.trim();
    }

    /// Drop the oldest turns until the cap holds. Returns how many were dropped.
    pub fn trim(&mut self) -> usize {
        let excess = self.turns.len().saturating_sub(self.capacity);
        if excess > 0 {
            self.turns.drain(..excess);
            trace!(dropped = excess, kept = self.turns.len(), "history trimmed");
        }
        excess
    }

    pub fn clear(&mut self) {
        self.turns.clear();
    }

    /// Maximum number of turns retained.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.turns.back()
    }

    /// Oldest-first iterator over the retained turns.
    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.turns.iter()
    }

    /// Owned copy of the retained turns, oldest first.
    pub fn snapshot(&self) -> Vec<Message> {
        self.turns.iter().cloned().collect()
    }
}
