//! Conversation parameters.

use relay_domain::{
    ConversationHistory, DEFAULT_HISTORY_CAPACITY, DEFAULT_SYSTEM_PROMPT, DomainError, Message,
};
use crate::state::conversation_store::DEFAULT_MAX_CONVERSATIONS;
use serde::{Deserialize, Serialize};

/// How new conversations are set up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationConfig {
    /// History slots, including the pinned system prompt.
    pub history_capacity: usize,
    /// Content of the pinned system prompt.
    pub system_prompt: String,
    /// Live conversations kept before the least recently used is dropped.
    pub max_conversations: usize,
}

impl Default for ConversationConfig {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            max_conversations: DEFAULT_MAX_CONVERSATIONS,
        }
    }
}

impl ConversationConfig {
    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }

    pub fn with_max_conversations(mut self, max: usize) -> Self {
        self.max_conversations = max;
        self
    }

    /// Empty history for a new conversation.
    pub fn new_history(&self) -> Result<ConversationHistory, DomainError> {
        ConversationHistory::new(
            Message::system(self.system_prompt.clone()),
            self.history_capacity,
        )
    }
}
