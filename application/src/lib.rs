//! Application layer for chat-relay
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod state;
pub mod use_cases;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types
pub use config::ConversationConfig;
pub use ports::{
    backend_gateway::{AuthError, BackendError, BackendGateway, NewSession},
    clock::{Clock, FixedClock, SystemClock},
    completion_gateway::{CompletionError, CompletionGateway},
};
pub use state::conversation_store::{
    ConversationStore, DEFAULT_MAX_CONVERSATIONS, SharedContext,
};
pub use use_cases::handle_message::{ConversationOrchestrator, HandleMessageError};
pub use use_cases::session_client::{SessionClient, SessionError};
