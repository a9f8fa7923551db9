//! Handle Message use case
//!
//! Drives one incoming message through the pipeline:
//!
//! ```text
//! append to history ─> create backend session (once) ─> completion ─> reply
//! ```
//!
//! The incoming message is appended before any outbound call and is kept even
//! when the completion fails. Session creation failures are logged and the
//! conversation carries on unlinked; it is never attempted again.

use crate::config::ConversationConfig;
use crate::ports::backend_gateway::BackendGateway;
use crate::ports::clock::{Clock, SystemClock};
use crate::ports::completion_gateway::{CompletionError, CompletionGateway};
use crate::state::conversation_store::ConversationStore;
use crate::use_cases::session_client::SessionClient;
use relay_domain::{ConversationContext, ConversationId, DomainError, Message};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info, warn};

/// Errors that can occur while handling a message
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HandleMessageError {
    #[error("Invalid message: {0}")]
    InvalidMessage(#[from] DomainError),

    #[error("Completion failed: {0}")]
    Completion(#[from] CompletionError),
}

/// Use case for relaying a message to the LLM and returning its reply
pub struct ConversationOrchestrator<B, C>
where
    B: BackendGateway + 'static,
    C: CompletionGateway + 'static,
{
    sessions: Arc<SessionClient<B>>,
    completion: Arc<C>,
    clock: Arc<dyn Clock>,
    store: ConversationStore,
}

impl<B, C> ConversationOrchestrator<B, C>
where
    B: BackendGateway + 'static,
    C: CompletionGateway + 'static,
{
    pub fn new(
        sessions: Arc<SessionClient<B>>,
        completion: Arc<C>,
        config: &ConversationConfig,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            sessions,
            completion,
            clock: Arc::new(SystemClock),
            store: ConversationStore::new(config.new_history()?, config.max_conversations),
        })
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn store(&self) -> &ConversationStore {
        &self.store
    }

    pub fn sessions(&self) -> &SessionClient<B> {
        &self.sessions
    }

    /// Handle `incoming` within `conversation`, serialized per conversation
    pub async fn handle_message(
        &self,
        conversation: &ConversationId,
        incoming: Message,
    ) -> Result<String, HandleMessageError> {
        if incoming.content.trim().is_empty() {
            return Err(DomainError::EmptyContent.into());
        }

        let context = self.store.get_or_create(conversation).await;
        let mut context = context.lock().await;
        debug!(conversation = %conversation, role = %incoming.role, "Handling message");

        Ok(self.handle_in_context(&mut context, incoming).await?)
    }

    /// Run the pipeline against an already locked conversation
    pub async fn handle_in_context(
        &self,
        context: &mut ConversationContext,
        incoming: Message,
    ) -> Result<String, CompletionError> {
        if let Some(evicted) = context.history.push(incoming) {
            debug!(role = %evicted.role, "History full, evicted oldest turn");
        }

        if context.session_due() {
            self.bootstrap_session(context).await;
        }

        let messages = context.history.to_vec();
        match self.completion.complete(&messages).await {
            Ok(reply) => Ok(reply),
            Err(e) => {
                error!(messages = messages.len(), "Completion request failed: {}", e);
                Err(e)
            }
        }
    }

    /// Single attempt at linking the conversation to a backend session
    async fn bootstrap_session(&self, context: &mut ConversationContext) {
        if !context.bootstrap.begin() {
            return;
        }

        let Some(first) = context.first_user_message().map(|m| m.content.clone()) else {
            context.bootstrap.finish(None);
            return;
        };

        match self.sessions.create_session(&first, self.clock.now()).await {
            Ok(handle) => {
                info!(session_id = %handle, "Conversation linked to backend session");
                context.bootstrap.finish(Some(handle));
            }
            Err(e) => {
                warn!("Session creation failed, continuing without a session: {}", e);
                context.bootstrap.finish(None);
            }
        }
    }
}
