use anyhow::{anyhow, Result};
use dotenvy::dotenv;
use tracing::{error, info};

mod assistant;
mod config;
mod handlers;
mod llm;
mod prompt;
mod state;
mod utils;

use assistant::{plan_image, plan_image_with_style};
use config::Config;
use prompt::ImageStyle;
use state::AppState;
use utils::logging::init_logging;

#[derive(Debug, Clone, PartialEq, Eq)]
struct EnhancePromptArgs {
    prompt: String,
    style: Option<ImageStyle>,
}

fn enhance_prompt_usage() -> &'static str {
    "Usage: assistant_gateway enhance-prompt --prompt <text> [--style <realistic|artistic|conceptual|default>]"
}

fn parse_enhance_prompt_args(args: &[String]) -> Result<Option<EnhancePromptArgs>> {
    if args.get(1).map(|value| value.as_str()) != Some("enhance-prompt") {
        return Ok(None);
    }

    let mut prompt: Option<String> = None;
    let mut style = None;

    let mut index = 2;
    while index < args.len() {
        match args[index].as_str() {
            "--prompt" => {
                index += 1;
                let value = args
                    .get(index)
                    .ok_or_else(|| anyhow!("Missing value for --prompt"))?;
                prompt = Some(value.clone());
            }
            "--style" => {
                index += 1;
                let value = args
                    .get(index)
                    .ok_or_else(|| anyhow!("Missing value for --style"))?;
                style = Some(ImageStyle::parse_or_default(value));
            }
            "--help" | "-h" => {
                return Err(anyhow!(enhance_prompt_usage()));
            }
            other => {
                return Err(anyhow!(
                    "Unknown enhance-prompt argument: {other}\n{}",
                    enhance_prompt_usage()
                ));
            }
        }
        index += 1;
    }

    let prompt = prompt
        .filter(|value| !value.is_empty())
        .ok_or_else(|| anyhow!("--prompt is required\n{}", enhance_prompt_usage()))?;

    Ok(Some(EnhancePromptArgs { prompt, style }))
}

fn run_enhance_prompt(config: &Config, args: EnhancePromptArgs) {
    let plan = match args.style {
        Some(style) => plan_image_with_style(&args.prompt, style, &config.image_models),
        None => plan_image(&args.prompt, &config.image_models),
    };
    println!("style: {}", plan.style);
    println!("model: {}", plan.model);
    println!("prompt: {}", plan.prompt);
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {err}");
    }
    info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let config = Config::load()?;

    let args: Vec<String> = std::env::args().collect();
    if let Some(enhance_args) = parse_enhance_prompt_args(&args)? {
        run_enhance_prompt(&config, enhance_args);
        return Ok(());
    }

    let _guards = init_logging(&config);

    if config.provider_api_key.is_empty() {
        return Err(anyhow!(
            "PROVIDER_API_KEY is required unless running enhance-prompt"
        ));
    }

    let bind_address = config.socket_address()?;
    let state = AppState::new(config)?;
    let app = handlers::router(state);

    let listener = tokio::net::TcpListener::bind(bind_address).await?;
    info!("Assistant gateway listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn no_subcommand_runs_server() {
        assert_eq!(parse_enhance_prompt_args(&args(&["gateway"])).unwrap(), None);
    }

    #[test]
    fn parses_prompt_and_style() {
        let parsed = parse_enhance_prompt_args(&args(&[
            "gateway",
            "enhance-prompt",
            "--prompt",
            "a red car",
            "--style",
            "cubist",
        ]))
        .unwrap();
        assert_eq!(
            parsed,
            Some(EnhancePromptArgs {
                prompt: "a red car".to_string(),
                style: Some(ImageStyle::Default),
            })
        );
    }

    #[test]
    fn enhance_prompt_ignores_invalid_bind_address() {
        let mut config = Config::load().unwrap();
        config.bind_address = "not-an-address".to_string();
        assert!(config.socket_address().is_err());

        let parsed = parse_enhance_prompt_args(&args(&[
            "gateway",
            "enhance-prompt",
            "--prompt",
            "a red car",
        ]))
        .unwrap()
        .unwrap();
        run_enhance_prompt(&config, parsed);
    }

    #[test]
    fn rejects_missing_prompt_and_unknown_flags() {
        assert!(parse_enhance_prompt_args(&args(&["gateway", "enhance-prompt"])).is_err());
        assert!(parse_enhance_prompt_args(&args(&[
            "gateway",
            "enhance-prompt",
            "--prompt",
            "x",
            "--size",
            "512"
        ]))
        .is_err());
        assert!(parse_enhance_prompt_args(&args(&["gateway", "enhance-prompt", "--prompt"])).is_err());
    }
}
