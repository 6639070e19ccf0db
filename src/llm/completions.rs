use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, warn};

use crate::llm::{summarize_error_body, ProviderError, PROVIDER_NAME};
use crate::utils::timing::log_llm_timing;

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        ChatMessage {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        ChatMessage {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

fn summarize_request(request: &ChatCompletionRequest) -> String {
    format!(
        "model={}, messages={}, temperature={}, max_tokens={}",
        request.model,
        request.messages.len(),
        request.temperature,
        request.max_tokens
    )
}

async fn send_chat_completion(
    client: &Client,
    url: &str,
    api_key: &str,
    timeout: Duration,
    request: &ChatCompletionRequest,
) -> Result<Option<String>, ProviderError> {
    let response = client
        .post(url)
        .bearer_auth(api_key)
        .timeout(timeout)
        .json(request)
        .send()
        .await?;

    let status = response.status();
    let body = response.text().await?;
    if status != StatusCode::OK {
        warn!(
            "Chat completion error: status={}, body={}",
            status,
            summarize_error_body(&body)
        );
        return Err(ProviderError::Status { status, body });
    }

    let parsed: ChatCompletionResponse = serde_json::from_str(&body)?;
    debug!(
        "Chat completion response received for model={} choices={}",
        request.model,
        parsed.choices.len()
    );
    Ok(parsed
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content))
}

/// Sends one chat completion. `Ok(None)` means the provider answered with no choices.
pub async fn call_chat_completion(
    client: &Client,
    url: &str,
    api_key: &str,
    timeout: Duration,
    request: &ChatCompletionRequest,
) -> Result<Option<String>, ProviderError> {
    debug!("Chat completion request: {}", summarize_request(request));

    let metadata = json!({ "messages": request.messages.len() });
    log_llm_timing(
        PROVIDER_NAME,
        &request.model,
        "chat_completion",
        Some(metadata),
        || send_chat_completion(client, url, api_key, timeout, request),
    )
    .await
}
