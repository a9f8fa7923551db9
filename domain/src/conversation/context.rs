//! Per-conversation state.

use super::entities::Message;
use super::history::ConversationHistory;
use crate::session::bootstrap::SessionBootstrap;

/// Everything one conversation owns: its history and its session bootstrap.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversationContext {
    pub history: ConversationHistory,
    pub bootstrap: SessionBootstrap,
}

impl ConversationContext {
    pub fn new(history: ConversationHistory) -> Self {
        Self {
            history,
            bootstrap: SessionBootstrap::default(),
        }
    }

    /// Whether the history has just reached the point where a session is due.
    pub fn session_due(&self) -> bool {
        self.bootstrap.should_attempt(self.history.len())
    }

    /// Content of the first turn, used to title the backend session.
    pub fn first_user_message(&self) -> Option<&Message> {
        self.history.first_turn()
    }
}
