//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("History capacity must be at least 2, got {0}")]
    InvalidCapacity(usize),

    #[error("History must start with a system message, got {0}")]
    UnpinnedSystemPrompt(String),

    #[error("Conversation id cannot be empty")]
    EmptyConversationId,

    #[error(
        "Conversation id is {0} bytes, the limit is {max}",
        max = crate::conversation::id::MAX_CONVERSATION_ID_LEN
    )]
    ConversationIdTooLong(usize),

    #[error("Message content cannot be empty")]
    EmptyContent,
}

impl DomainError {
    /// Check if this error was caused by caller-supplied input
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            DomainError::EmptyConversationId
                | DomainError::ConversationIdTooLong(_)
                | DomainError::EmptyContent
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_capacity_display() {
        let error = DomainError::InvalidCapacity(1);
        assert_eq!(error.to_string(), "History capacity must be at least 2, got 1");
    }

    #[test]
    fn test_is_invalid_input_check() {
        assert!(DomainError::EmptyContent.is_invalid_input());
        assert!(DomainError::EmptyConversationId.is_invalid_input());
        assert!(DomainError::ConversationIdTooLong(200).is_invalid_input());
        assert!(!DomainError::InvalidCapacity(0).is_invalid_input());
        assert!(!DomainError::UnpinnedSystemPrompt("user".to_string()).is_invalid_input());
    }
}
