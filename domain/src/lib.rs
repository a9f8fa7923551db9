//! Domain layer for chat-relay
//!
//! This crate contains the core entities and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Conversation
//!
//! A conversation is a bounded history of messages whose first slot is a
//! pinned system prompt. The whole history is the prompt sent to the
//! completion API on every turn.
//!
//! ## Session
//!
//! The backend keeps a session record per conversation. It is created once,
//! after the first user turn, using a bearer credential obtained at startup.

pub mod conversation;
pub mod core;
pub mod session;

// Re-export commonly used types
pub use conversation::{
    context::ConversationContext,
    entities::{Message, Role},
    history::{ConversationHistory, DEFAULT_HISTORY_CAPACITY, DEFAULT_SYSTEM_PROMPT},
    id::{ConversationId, MAX_CONVERSATION_ID_LEN},
};
pub use core::error::DomainError;
pub use session::{
    bootstrap::{BOOTSTRAP_HISTORY_LEN, SessionBootstrap},
    entities::{Credential, LoginCredentials, SessionHandle},
    timestamp::format_session_timestamp,
};
