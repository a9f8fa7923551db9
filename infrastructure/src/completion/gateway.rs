//! reqwest implementation of [`CompletionGateway`].

use super::protocol::{COMPLETIONS_PATH, ChatCompletionRequest, interpret_completion};
use async_trait::async_trait;
use relay_application::{CompletionError, CompletionGateway};
use relay_domain::Message;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Request};
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_MODEL: &str = "mistralai/devstral-small:free";

/// Chat completions over HTTP (OpenRouter, OpenAI or any compatible server)
#[derive(Clone)]
pub struct HttpCompletionGateway {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl HttpCompletionGateway {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            model: model.into(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub(crate) fn completion_request(
        &self,
        messages: &[Message],
    ) -> Result<Request, reqwest::Error> {
        self.client
            .post(format!("{}{}", self.base_url, COMPLETIONS_PATH))
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .json(&ChatCompletionRequest {
                model: &self.model,
                messages,
            })
            .build()
    }
}

impl std::fmt::Debug for HttpCompletionGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpCompletionGateway")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

fn transport_error(err: reqwest::Error) -> CompletionError {
    if err.is_timeout() {
        CompletionError::Timeout
    } else {
        CompletionError::Transport(err.to_string())
    }
}

#[async_trait]
impl CompletionGateway for HttpCompletionGateway {
    async fn complete(&self, messages: &[Message]) -> Result<String, CompletionError> {
        let request = self.completion_request(messages).map_err(transport_error)?;
        let response = self.client.execute(request).await.map_err(transport_error)?;

        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;
        debug!(
            status = status.as_u16(),
            model = %self.model,
            "Completion API responded"
        );
        interpret_completion(status, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_targets_completions_endpoint_with_api_key() {
        let gateway = HttpCompletionGateway::new(
            "https://openrouter.ai/api/v1/",
            "sk-test",
            DEFAULT_MODEL,
            Duration::from_secs(5),
        )
        .unwrap();

        let request = gateway
            .completion_request(&[Message::system("sys"), Message::user("hi")])
            .unwrap();

        assert_eq!(
            request.url().as_str(),
            "https://openrouter.ai/api/v1/chat/completions"
        );
        assert_eq!(request.headers().get(AUTHORIZATION).unwrap(), "Bearer sk-test");
        let body: serde_json::Value =
            serde_json::from_slice(request.body().and_then(|b| b.as_bytes()).unwrap()).unwrap();
        assert_eq!(body["model"], DEFAULT_MODEL);
        assert_eq!(body["messages"][1]["content"], "hi");
    }

    #[test]
    fn test_debug_hides_api_key() {
        let gateway =
            HttpCompletionGateway::new(DEFAULT_BASE_URL, "sk-secret", "m", Duration::from_secs(5))
                .unwrap();
        assert!(!format!("{:?}", gateway).contains("sk-secret"));
    }

    #[tokio::test]
    async fn test_unreachable_provider_is_transport_error() {
        let gateway =
            HttpCompletionGateway::new("http://127.0.0.1:9", "k", "m", Duration::from_secs(2))
                .unwrap();
        let err = gateway.complete(&[Message::user("hi")]).await.unwrap_err();
        assert!(matches!(
            err,
            CompletionError::Transport(_) | CompletionError::Timeout
        ));
    }
}
