//! Conversation identifier value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Longest accepted conversation id, in bytes.
pub const MAX_CONVERSATION_ID_LEN: usize = 128;

/// Key separating independent conversations (Value Object)
///
/// Requests that do not name a conversation share the default one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ConversationId(String);

impl ConversationId {
    pub const DEFAULT: &'static str = "default";

    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyConversationId);
        }
        if trimmed.len() > MAX_CONVERSATION_ID_LEN {
            return Err(DomainError::ConversationIdTooLong(trimmed.len()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ConversationId {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl fmt::Display for ConversationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ConversationId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ConversationId> for String {
    fn from(id: ConversationId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_whitespace() {
        let id = ConversationId::new("  abc ").unwrap();
        assert_eq!(id.as_str(), "abc");
    }

    #[test]
    fn test_rejects_blank() {
        assert_eq!(
            ConversationId::new("   ").unwrap_err(),
            DomainError::EmptyConversationId
        );
    }

    #[test]
    fn test_rejects_overlong_id() {
        let longest = "a".repeat(MAX_CONVERSATION_ID_LEN);
        assert!(ConversationId::new(longest).is_ok());

        let too_long = "a".repeat(MAX_CONVERSATION_ID_LEN + 1);
        assert_eq!(
            ConversationId::new(too_long).unwrap_err(),
            DomainError::ConversationIdTooLong(MAX_CONVERSATION_ID_LEN + 1)
        );
    }

    #[test]
    fn test_default_value() {
        assert_eq!(ConversationId::default().as_str(), "default");
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: ConversationId = serde_json::from_str(r#""c-1""#).unwrap();
        assert_eq!(ok.to_string(), "c-1");
        assert!(serde_json::from_str::<ConversationId>(r#""""#).is_err());
    }
}
