use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, warn};

use crate::llm::{summarize_error_body, truncate_for_log, ProviderError, PROVIDER_NAME};
use crate::utils::timing::log_llm_timing;

pub const IMAGE_COUNT: u32 = 1;
pub const IMAGE_SIZE: &str = "1024x1024";
pub const IMAGE_QUALITY: &str = "standard";

#[derive(Debug, Clone, Serialize)]
pub struct ImageGenerationRequest {
    pub model: String,
    pub prompt: String,
    pub n: u32,
    pub size: String,
    pub quality: String,
}

impl ImageGenerationRequest {
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        ImageGenerationRequest {
            model: model.into(),
            prompt: prompt.into(),
            n: IMAGE_COUNT,
            size: IMAGE_SIZE.to_string(),
            quality: IMAGE_QUALITY.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ImageGenerationResponse {
    #[serde(default)]
    data: Vec<ImageDatum>,
}

#[derive(Debug, Deserialize)]
struct ImageDatum {
    url: String,
}

async fn send_image_generation(
    client: &Client,
    url: &str,
    api_key: &str,
    timeout: Duration,
    request: &ImageGenerationRequest,
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
            "Image generation error: status={}, body={}",
            status,
            summarize_error_body(&body)
        );
        return Err(ProviderError::Status { status, body });
    }

    let parsed: ImageGenerationResponse = serde_json::from_str(&body)?;
    Ok(parsed.data.into_iter().next().map(|datum| datum.url))
}

/// Sends one image generation. `Ok(None)` means the provider returned no image data.
pub async fn call_image_generation(
    client: &Client,
    url: &str,
    api_key: &str,
    timeout: Duration,
    request: &ImageGenerationRequest,
) -> Result<Option<String>, ProviderError> {
    debug!(
        "Image generation request: model={}, size={}, prompt={}",
        request.model,
        request.size,
        truncate_for_log(&request.prompt, 200)
    );

    let metadata = json!({ "size": request.size, "n": request.n });
    log_llm_timing(
        PROVIDER_NAME,
        &request.model,
        "image_generation",
        Some(metadata),
        || send_image_generation(client, url, api_key, timeout, request),
    )
    .await
}
