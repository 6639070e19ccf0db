pub mod completions;
pub mod images;

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

pub use completions::{call_chat_completion, ChatCompletionRequest, ChatMessage};
pub use images::{call_image_generation, ImageGenerationRequest};

pub const PROVIDER_NAME: &str = "a4f";

const ERROR_BODY_LOG_LIMIT: usize = 2000;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    #[error("provider returned status {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("{0}")]
    Decode(#[from] serde_json::Error),
}

pub(crate) fn truncate_for_log(value: &str, limit: usize) -> String {
    if value.chars().count() <= limit {
        return value.to_string();
    }
    let truncated: String = value.chars().take(limit).collect();
    format!("{truncated}... (truncated)")
}

/// Pulls `error.message` (or `message`) out of a provider error body when it is JSON.
pub(crate) fn summarize_error_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return "empty response body".to_string();
    }

    if let Ok(value) = serde_json::from_str::<Value>(trimmed) {
        let message = value
            .pointer("/error/message")
            .and_then(|v| v.as_str())
            .or_else(|| value.get("message").and_then(|v| v.as_str()));
        if let Some(message) = message {
            return truncate_for_log(message, ERROR_BODY_LOG_LIMIT);
        }
        return truncate_for_log(&value.to_string(), ERROR_BODY_LOG_LIMIT);
    }

    truncate_for_log(trimmed, ERROR_BODY_LOG_LIMIT)
}
