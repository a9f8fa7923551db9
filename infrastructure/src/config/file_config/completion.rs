//! `[completion]` section

use crate::completion::gateway::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// LLM provider settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCompletionConfig {
    /// OpenAI-compatible API root (the `/chat/completions` path is appended)
    pub base_url: String,
    /// Provider API key, independent of the backend credential
    pub api_key: String,
    /// Model identifier sent with every request
    pub model: String,
    /// Timeout for each completion request
    pub timeout_seconds: u64,
}

impl Default for FileCompletionConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            timeout_seconds: 120,
        }
    }
}

impl FileCompletionConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}
