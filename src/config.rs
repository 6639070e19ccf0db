use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{anyhow, Result};
use tracing::warn;

use crate::prompt::ImageStyle;

/// Backend model identifiers keyed by image style. Always total.
#[derive(Debug, Clone)]
pub struct ImageModels {
    pub realistic: String,
    pub artistic: String,
    pub conceptual: String,
    pub default: String,
}

impl ImageModels {
    pub fn model_for(&self, style: ImageStyle) -> &str {
        match style {
            ImageStyle::Realistic => &self.realistic,
            ImageStyle::Artistic => &self.artistic,
            ImageStyle::Conceptual => &self.conceptual,
            ImageStyle::Default => &self.default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub provider_api_key: String,
    pub provider_base_url: String,
    pub chat_model: String,
    pub chat_temperature: f32,
    pub chat_max_tokens: u32,
    pub chat_timeout: Duration,
    pub image_models: ImageModels,
    pub image_timeout: Duration,
    pub bind_address: String,
    pub static_dir: PathBuf,
    pub log_level: String,
    pub log_dir: PathBuf,
}

fn env_string(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn env_f32(name: &str, default: f32) -> f32 {
    env::var(name)
        .ok()
        .and_then(|value| value.trim().parse::<f32>().ok())
        .unwrap_or(default)
}

fn env_u32(name: &str, default: u32) -> u32 {
    env::var(name)
        .ok()
        .and_then(|value| value.trim().parse::<u32>().ok())
        .unwrap_or(default)
}

fn env_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .ok()
        .and_then(|value| value.trim().parse::<u64>().ok())
        .unwrap_or(default)
}

fn env_model(name: &str, default: &str) -> String {
    let value = env_string(name, default);
    let trimmed = value.trim();
    if trimmed.is_empty() {
        warn!("{name} is empty; using {default}");
        return default.to_string();
    }
    trimmed.to_string()
}

fn normalize_base_url(value: String) -> String {
    value.trim().trim_end_matches('/').to_string()
}

impl Config {
    pub fn load() -> Result<Self> {
        Ok(Config {
            provider_api_key: env_string("PROVIDER_API_KEY", "").trim().to_string(),
            provider_base_url: normalize_base_url(env_string(
                "PROVIDER_BASE_URL",
                "https://api.a4f.co/v1",
            )),
            chat_model: env_model("CHAT_MODEL", "provider-3/gpt-4o-mini"),
            chat_temperature: env_f32("CHAT_TEMPERATURE", 0.7),
            chat_max_tokens: env_u32("CHAT_MAX_TOKENS", 500),
            chat_timeout: Duration::from_secs(env_u64("CHAT_TIMEOUT_SECONDS", 30)),
            image_models: ImageModels {
                realistic: env_model("IMAGE_MODEL_REALISTIC", "provider-4/imagen-4"),
                artistic: env_model("IMAGE_MODEL_ARTISTIC", "provider-4/imagen-3"),
                conceptual: env_model("IMAGE_MODEL_CONCEPTUAL", "provider-4/qwen-image"),
                default: env_model("IMAGE_MODEL_DEFAULT", "provider-4/imagen-4"),
            },
            image_timeout: Duration::from_secs(env_u64("IMAGE_TIMEOUT_SECONDS", 60)),
            bind_address: env_string("BIND_ADDRESS", "0.0.0.0:5000").trim().to_string(),
            static_dir: PathBuf::from(env_string("STATIC_DIR", "static")),
            log_level: env_string("LOG_LEVEL", "info"),
            log_dir: PathBuf::from(env_string("LOG_DIR", "logs")),
        })
    }

    /// Only the server needs a listen address, so it is validated here rather than in `load`.
    pub fn socket_address(&self) -> Result<SocketAddr> {
        self.bind_address
            .parse::<SocketAddr>()
            .map_err(|err| anyhow!("Invalid BIND_ADDRESS '{}': {err}", self.bind_address))
    }

    pub fn chat_completions_url(&self) -> String {
        format!("{}/chat/completions", self.provider_base_url)
    }

    pub fn image_generations_url(&self) -> String {
        format!("{}/images/generations", self.provider_base_url)
    }
}

/// Lower-cased phrasings of "who made you" that short-circuit the chat call.
pub const CREATOR_TRIGGER_PHRASES: &[&str] = &[
    "who made you",
    "who created you",
    "who developed you",
    "who built you",
    "who is your creator",
    "who is your developer",
    "who is your maker",
    "tumhare nirmata kaun hai",
    "tumhe kisne banaya",
    "tumhare developer kaun hai",
    "তোমাক কোনে বনালে",
    "তোমাৰ নিৰ্মাতা কোন",
    "তোমাৰ ডেভেলপাৰ কোন",
    "তোমাক কোনে সৃষ্টি কৰিলে",
    "তোমাৰ স্ৰষ্টা কোন",
    "quién te creó",
    "quién te hizo",
    "quién es tu creador",
    "quién es tu desarrollador",
    "qui t'a créé",
    "qui t'a fait",
    "qui est ton créateur",
    "qui est ton développeur",
];

pub const OPENAI_TRIGGER: &str = "openai";

pub const CREATOR_ANSWER_EN: &str =
    "I was made by a student named Priyangshu who is studying in 11th grade.";
pub const CREATOR_ANSWER_AS: &str = "মোক এগৰাকী একাদশ শ্ৰেণীৰ ছাত্ৰ প্ৰিয়াংশুৱে বনাইছে।";

pub const OPENAI_DENIAL_EN: &str =
    "No, I was not made by OpenAI. I was created by a student named Priyangshu.";
pub const OPENAI_DENIAL_AS: &str =
    "নহয়, মোক OpenAI-য়ে বনোৱা নাই। মোক প্ৰিয়াংশু নামৰ এগৰাকী ছাত্ৰই সৃষ্টি কৰিছে।";

pub const CHAT_FALLBACK_REPLY: &str = "I couldn't process your request. Please try again.";

pub const PERSONA_PROMPT: &str =
    "You are Priyangshu, a helpful AI assistant. Be concise and friendly. ";

pub const ASSAMESE_FLUENCY_PROMPT: &str =
    "You are fluent in Assamese and can understand and respond perfectly in Assamese. ";

pub const CREATOR_INSTRUCTION_AS: &str = "If anyone asks who made you or who your developer is, you must respond in Assamese that you were made by a student named Priyangshu who is studying in 11th grade. ";

pub const CREATOR_INSTRUCTION_EN: &str = "If anyone asks who made you or who your developer is, you must respond that you were made by a student named Priyangshu who is studying in 11th grade. ";

pub const NOT_OPENAI_PROMPT: &str = "You are not made by OpenAI.";

pub const ASSAMESE_REPLY_PROMPT: &str = " Respond in Assamese if the user speaks Assamese.";
