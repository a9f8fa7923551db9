//! Shared handler state.

use relay_application::{BackendGateway, CompletionGateway, ConversationOrchestrator};
use std::sync::Arc;

/// State handed to every handler and middleware
pub struct AppState<B, C>
where
    B: BackendGateway + 'static,
    C: CompletionGateway + 'static,
{
    pub orchestrator: Arc<ConversationOrchestrator<B, C>>,
    /// Expected `x-api-key` value; `None` leaves the API open
    pub api_key: Option<Arc<str>>,
}

impl<B, C> AppState<B, C>
where
    B: BackendGateway + 'static,
    C: CompletionGateway + 'static,
{
    pub fn new(orchestrator: Arc<ConversationOrchestrator<B, C>>) -> Self {
        Self {
            orchestrator,
            api_key: None,
        }
    }

    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key.map(Arc::from);
        self
    }
}

// Manual impl: the gateways themselves need not be Clone.
impl<B, C> Clone for AppState<B, C>
where
    B: BackendGateway + 'static,
    C: CompletionGateway + 'static,
{
    fn clone(&self) -> Self {
        Self {
            orchestrator: Arc::clone(&self.orchestrator),
            api_key: self.api_key.clone(),
        }
    }
}
