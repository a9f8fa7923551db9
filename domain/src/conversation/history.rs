//! Bounded conversation history.
//!
//! The history is what gets sent to the completion API on every turn. It has
//! one protocol:
//!
//! ```text
//! slot 0        slots 1..capacity-1
//! [system] ---- [oldest turn, ..., newest turn]   (FIFO)
//! ```
//!
//! Slot 0 holds the system prompt and is never evicted. Once the history is
//! full, appending a message first evicts the oldest turn.
//!
//! # Examples
//!
//! ```
//! use relay_domain::{ConversationHistory, Message};
//!
//! let mut history = ConversationHistory::new(Message::system("be nice"), 3).unwrap();
//! history.push(Message::user("one"));
//! history.push(Message::assistant("two"));
//! let evicted = history.push(Message::user("three"));
//!
//! assert_eq!(evicted, Some(Message::user("one")));
//! assert_eq!(history.len(), 3);
//! assert_eq!(history.system_prompt().content, "be nice");
//! ```

use super::entities::Message;
use crate::core::error::DomainError;
use std::collections::VecDeque;

/// Default number of slots, including the pinned system prompt.
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

/// System prompt used when none is configured.
pub const DEFAULT_SYSTEM_PROMPT: &str = "Jesteś systemem asystującym.";

/// Bounded history with a pinned system prompt (Entity).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationHistory {
    system: Message,
    turns: VecDeque<Message>,
    capacity: usize,
}

impl ConversationHistory {
    /// Create a history holding only `system`.
    ///
    /// `capacity` counts the system slot, so it must be at least 2.
    pub fn new(system: Message, capacity: usize) -> Result<Self, DomainError> {
        if capacity < 2 {
            return Err(DomainError::InvalidCapacity(capacity));
        }
        if !system.is_system() {
            return Err(DomainError::UnpinnedSystemPrompt(system.role.to_string()));
        }
        Ok(Self {
            system,
            turns: VecDeque::with_capacity(capacity - 1),
            capacity,
        })
    }

    /// History with the default prompt and capacity.
    pub fn with_defaults() -> Self {
        Self {
            system: Message::system(DEFAULT_SYSTEM_PROMPT),
            turns: VecDeque::with_capacity(DEFAULT_HISTORY_CAPACITY - 1),
            capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }

    /// Append a message, returning the evicted turn if the history was full.
    pub fn push(&mut self, message: Message) -> Option<Message> {
        let evicted = if self.is_full() {
            self.turns.pop_front()
        } else {
            None
        };
        self.turns.push_back(message);
        evicted
    }

    pub fn system_prompt(&self) -> &Message {
        &self.system
    }

    /// Message at `index`, where 0 is the system prompt.
    pub fn get(&self, index: usize) -> Option<&Message> {
        match index {
            0 => Some(&self.system),
            n => self.turns.get(n - 1),
        }
    }

    /// The first turn after the system prompt (slot 1).
    pub fn first_turn(&self) -> Option<&Message> {
        self.turns.front()
    }

    /// Number of messages including the system prompt.
    pub fn len(&self) -> usize {
        1 + self.turns.len()
    }

    /// Always false: the system prompt is never removed.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.len() == self.capacity
    }

    /// All messages oldest first, system prompt included.
    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        std::iter::once(&self.system).chain(self.turns.iter())
    }

    /// Owned copy of the messages in prompt order.
    pub fn to_vec(&self) -> Vec<Message> {
        self.iter().cloned().collect()
    }
}

impl Default for ConversationHistory {
    fn default() -> Self {
        Self::with_defaults()
    }
}
