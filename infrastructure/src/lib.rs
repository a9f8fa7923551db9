//! Infrastructure layer for chat-relay
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod backend;
pub mod completion;
pub mod config;

// Re-export commonly used types
pub use backend::gateway::HttpBackendGateway;
pub use completion::gateway::{DEFAULT_BASE_URL, DEFAULT_MODEL, HttpCompletionGateway};
pub use config::{
    ConfigLoader, ConfigValidationError, FileBackendConfig, FileCompletionConfig, FileConfig,
    FileConversationConfig, FileLoggingConfig, FileServerConfig,
};
