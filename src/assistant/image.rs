use tracing::{info, warn};

use crate::config::ImageModels;
use crate::llm::{call_image_generation, ImageGenerationRequest, ProviderError};
use crate::prompt::{classify_image_style, enhance_prompt, ImageStyle};
use crate::state::AppState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePlan {
    pub style: ImageStyle,
    pub model: String,
    pub prompt: String,
}

/// Classifies the raw prompt, then enhances that same raw prompt for the chosen style.
pub fn plan_image(prompt: &str, models: &ImageModels) -> ImagePlan {
    let style = classify_image_style(prompt);
    plan_image_with_style(prompt, style, models)
}

pub fn plan_image_with_style(prompt: &str, style: ImageStyle, models: &ImageModels) -> ImagePlan {
    ImagePlan {
        style,
        model: models.model_for(style).to_string(),
        prompt: enhance_prompt(prompt, style),
    }
}

pub async fn image_reply(state: &AppState, prompt: &str) -> String {
    let config = &state.config;
    let plan = plan_image(prompt, &config.image_models);
    info!(
        "Generating image style={} model={}",
        plan.style, plan.model
    );

    let request = ImageGenerationRequest::new(plan.model.clone(), plan.prompt);
    let result = call_image_generation(
        &state.http,
        &config.image_generations_url(),
        &config.provider_api_key,
        config.image_timeout,
        &request,
    )
    .await;

    match result {
        Ok(Some(url)) => format!(
            "✅ Image generated successfully using {}!\n🖼️  View your image: {}",
            plan.model, url
        ),
        Ok(None) => {
            warn!("Image generation returned no data for model={}", plan.model);
            "❌ Image generation failed. No image data returned.".to_string()
        }
        Err(ProviderError::Status { status, .. }) => format!(
            "❌ Image generation failed with status code: {}",
            status.as_u16()
        ),
        Err(err) => {
            warn!("Image generation failed: {err}");
            format!("Error: {err}")
        }
    }
}
