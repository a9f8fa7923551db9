//! Completion Gateway port
//!
//! Defines the interface for the LLM chat-completion provider.

use async_trait::async_trait;
use relay_domain::Message;
use thiserror::Error;

/// Errors that can occur while requesting a completion
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompletionError {
    #[error("Completion API returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Completion API unreachable: {0}")]
    Transport(String),

    #[error("Completion API timed out")]
    Timeout,

    #[error("Completion response had no usable choice")]
    EmptyResponse,

    #[error("Malformed completion response: {0}")]
    Malformed(String),
}

/// Gateway for LLM completions
///
/// The model identifier and API key belong to the adapter; callers only
/// supply the ordered message list.
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    /// Send `messages` (oldest first) and return the first choice's text
    async fn complete(&self, messages: &[Message]) -> Result<String, CompletionError>;
}
