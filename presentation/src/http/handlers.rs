//! HTTP request handlers.

use super::error::ApiResult;
use super::state::AppState;
use axum::{Json, extract::State};
use relay_application::{BackendGateway, CompletionGateway};
use relay_domain::{ConversationId, Message, Role};
use serde::{Deserialize, Serialize};

/// `GET /` acknowledgement
#[derive(Debug, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
}

/// `POST /api/send-user-message` body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest {
    pub role: Role,
    pub content: String,
    /// Conversation to append to; the shared default one when absent
    #[serde(default)]
    pub conversation_id: Option<ConversationId>,
}

/// `POST /api/send-user-message` reply
#[derive(Debug, Serialize, Deserialize)]
pub struct SendMessageResponse {
    pub reply: String,
}

/// Liveness placeholder
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "chat-relay is running".to_string(),
    })
}

/// Relay one message and return the model's reply
///
/// Blank content is rejected by the orchestrator and surfaces as 400.
pub async fn send_user_message<B, C>(
    State(state): State<AppState<B, C>>,
    Json(request): Json<SendMessageRequest>,
) -> ApiResult<Json<SendMessageResponse>>
where
    B: BackendGateway + 'static,
    C: CompletionGateway + 'static,
{
    let conversation = request.conversation_id.unwrap_or_default();
    let message = Message::new(request.role, request.content);

    let reply = state
        .orchestrator
        .handle_message(&conversation, message)
        .await?;

    Ok(Json(SendMessageResponse { reply }))
}
