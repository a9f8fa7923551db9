//! API key middleware.

use super::error::ApiError;
use super::state::AppState;
use axum::{body::Body, extract::State, http::Request, middleware::Next, response::Response};
use relay_application::{BackendGateway, CompletionGateway};
use tracing::warn;

/// Header carrying the shared API key
pub const API_KEY_HEADER: &str = "x-api-key";

/// Reject requests whose `x-api-key` does not match the configured key.
///
/// Passes everything through when no key is configured.
pub async fn require_api_key<B, C>(
    State(state): State<AppState<B, C>>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, ApiError>
where
    B: BackendGateway + 'static,
    C: CompletionGateway + 'static,
{
    let Some(expected) = state.api_key.as_deref() else {
        return Ok(next.run(req).await);
    };

    let provided = req
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|h| h.to_str().ok());

    match provided {
        Some(key) if keys_match(key, expected) => Ok(next.run(req).await),
        Some(_) => {
            warn!(path = %req.uri().path(), "Rejected request with invalid API key");
            Err(ApiError::unauthorized("invalid API key"))
        }
        None => {
            warn!(path = %req.uri().path(), "Rejected request without API key");
            Err(ApiError::unauthorized("missing x-api-key header"))
        }
    }
}

/// Comparison whose running time does not depend on where the keys differ.
fn keys_match(provided: &str, expected: &str) -> bool {
    let (a, b) = (provided.as_bytes(), expected.as_bytes());
    a.len() == b.len() && a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_match() {
        assert!(keys_match("secret", "secret"));
        assert!(!keys_match("secreT", "secret"));
        assert!(!keys_match("secret-longer", "secret"));
        assert!(!keys_match("", "secret"));
    }
}
