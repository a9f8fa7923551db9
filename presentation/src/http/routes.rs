//! API route definitions.

use super::auth::require_api_key;
use super::handlers;
use super::state::AppState;
use axum::{
    Router, middleware,
    routing::{get, post},
};
use relay_application::{BackendGateway, CompletionGateway, ConversationOrchestrator};
use std::sync::Arc;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Create the application router.
///
/// When `api_key` is set, `/api` routes demand it in `x-api-key`; `GET /`
/// stays open.
pub fn create_router<B, C>(
    orchestrator: Arc<ConversationOrchestrator<B, C>>,
    api_key: Option<String>,
) -> Router
where
    B: BackendGateway + 'static,
    C: CompletionGateway + 'static,
{
    let state = AppState::new(orchestrator).with_api_key(api_key);

    let api_routes = Router::new()
        .route(
            "/api/send-user-message",
            post(handlers::send_user_message::<B, C>),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_api_key::<B, C>,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_request(DefaultOnRequest::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/", get(handlers::root))
        .merge(api_routes)
        .layer(trace_layer)
        .with_state(state)
}
