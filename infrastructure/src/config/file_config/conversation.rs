//! `[conversation]` section

use relay_application::{ConversationConfig, DEFAULT_MAX_CONVERSATIONS};
use relay_domain::{DEFAULT_HISTORY_CAPACITY, DEFAULT_SYSTEM_PROMPT};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConversationConfig {
    /// History slots including the system prompt (minimum 2)
    pub history_capacity: usize,
    /// Pinned system prompt
    pub system_prompt: String,
    /// Live conversations kept in memory; the least recently used idle one
    /// is dropped past this
    pub max_conversations: usize,
}

impl Default for FileConversationConfig {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            max_conversations: DEFAULT_MAX_CONVERSATIONS,
        }
    }
}

impl FileConversationConfig {
    pub fn to_conversation_config(&self) -> ConversationConfig {
        ConversationConfig::default()
            .with_history_capacity(self.history_capacity)
            .with_system_prompt(self.system_prompt.clone())
            .with_max_conversations(self.max_conversations)
    }
}
