//! Application-level configuration.
//!
//! - [`ConversationConfig`]: shape of every new conversation (prompt, capacity)

pub mod conversation_config;

pub use conversation_config::ConversationConfig;
