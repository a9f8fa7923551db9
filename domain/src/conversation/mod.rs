//! Conversation domain.
//!
//! - [`entities::Message`]: a single message within a conversation
//! - [`context::ConversationContext`]: history plus session bootstrap state
//! - [`history::ConversationHistory`]: bounded history with a pinned system prompt
//! - [`id::ConversationId`]: key separating independent conversations

pub mod context;
pub mod entities;
pub mod history;
pub mod id;
