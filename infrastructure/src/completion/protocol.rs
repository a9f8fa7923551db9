//! Wire types for the OpenAI-compatible chat completions API.

use relay_application::CompletionError;
use relay_domain::Message;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

pub const COMPLETIONS_PATH: &str = "/chat/completions";

#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub messages: &'a [Message],
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

/// Extract the first choice's text from a completion response.
pub fn interpret_completion(status: StatusCode, body: &str) -> Result<String, CompletionError> {
    if !status.is_success() {
        return Err(CompletionError::Status {
            status: status.as_u16(),
            body: body.to_string(),
        });
    }

    let parsed: ChatCompletionResponse =
        serde_json::from_str(body).map_err(|e| CompletionError::Malformed(e.to_string()))?;

    parsed
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .filter(|content| !content.is_empty())
        .ok_or(CompletionError::EmptyResponse)
}
