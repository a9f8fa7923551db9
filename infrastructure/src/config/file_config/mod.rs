//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod backend;
mod completion;
mod conversation;
mod logging;
mod server;

pub use backend::FileBackendConfig;
pub use completion::FileCompletionConfig;
pub use conversation::FileConversationConfig;
pub use logging::FileLoggingConfig;
pub use server::FileServerConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigValidationError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{0} cannot be 0")]
    ZeroTimeout(&'static str),

    #[error("conversation.history_capacity must be at least 2, got {0}")]
    HistoryTooSmall(usize),

    #[error("conversation.max_conversations must be at least 1")]
    NoConversations,

    #[error("server.api_key is set but blank")]
    BlankApiKey,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// HTTP listener
    pub server: FileServerConfig,
    /// Backend auth/session API
    pub backend: FileBackendConfig,
    /// LLM provider
    pub completion: FileCompletionConfig,
    /// History shape
    pub conversation: FileConversationConfig,
    /// Log output
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Values are only checked for presence and basic sanity; whether the
    /// backend accepts the credentials is discovered at login.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();

        let required = [
            ("backend.url", &self.backend.url),
            ("backend.email", &self.backend.email),
            ("backend.password", &self.backend.password),
            ("completion.base_url", &self.completion.base_url),
            ("completion.api_key", &self.completion.api_key),
            ("completion.model", &self.completion.model),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                issues.push(ConfigValidationError::Missing(field));
            }
        }

        if self.backend.timeout_seconds == 0 {
            issues.push(ConfigValidationError::ZeroTimeout("backend.timeout_seconds"));
        }
        if self.completion.timeout_seconds == 0 {
            issues.push(ConfigValidationError::ZeroTimeout(
                "completion.timeout_seconds",
            ));
        }

        if self.conversation.history_capacity < 2 {
            issues.push(ConfigValidationError::HistoryTooSmall(
                self.conversation.history_capacity,
            ));
        }

        if self.conversation.max_conversations == 0 {
            issues.push(ConfigValidationError::NoConversations);
        }

        if let Some(key) = &self.server.api_key
            && key.trim().is_empty()
        {
            issues.push(ConfigValidationError::BlankApiKey);
        }

        issues
    }
}
