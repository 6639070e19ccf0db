use tracing::{info, warn};

use crate::config::{
    ASSAMESE_FLUENCY_PROMPT, ASSAMESE_REPLY_PROMPT, CHAT_FALLBACK_REPLY, CREATOR_ANSWER_AS,
    CREATOR_ANSWER_EN, CREATOR_INSTRUCTION_AS, CREATOR_INSTRUCTION_EN, CREATOR_TRIGGER_PHRASES,
    NOT_OPENAI_PROMPT, OPENAI_DENIAL_AS, OPENAI_DENIAL_EN, OPENAI_TRIGGER, PERSONA_PROMPT,
};
use crate::llm::{call_chat_completion, ChatCompletionRequest, ChatMessage, ProviderError};
use crate::state::AppState;
use crate::utils::language::{detect_language, Language};

fn localized(language: Language, english: &'static str, assamese: &'static str) -> &'static str {
    match language {
        Language::Assamese => assamese,
        Language::English => english,
    }
}

pub fn is_creator_question(lowered: &str) -> bool {
    CREATOR_TRIGGER_PHRASES
        .iter()
        .any(|phrase| lowered.contains(phrase))
}

/// Answers that bypass the provider. The creator question wins over the OpenAI denial.
pub fn canned_reply(user_input: &str, language: Language) -> Option<&'static str> {
    let lowered = user_input.to_lowercase();
    if is_creator_question(&lowered) {
        return Some(localized(language, CREATOR_ANSWER_EN, CREATOR_ANSWER_AS));
    }
    if lowered.contains(OPENAI_TRIGGER) {
        return Some(localized(language, OPENAI_DENIAL_EN, OPENAI_DENIAL_AS));
    }
    None
}

pub fn build_system_prompt(language: Language) -> String {
    let mut prompt = String::from(PERSONA_PROMPT);
    match language {
        Language::Assamese => {
            prompt.push_str(ASSAMESE_FLUENCY_PROMPT);
            prompt.push_str(CREATOR_INSTRUCTION_AS);
            prompt.push_str(NOT_OPENAI_PROMPT);
            prompt.push_str(ASSAMESE_REPLY_PROMPT);
        }
        Language::English => {
            prompt.push_str(CREATOR_INSTRUCTION_EN);
            prompt.push_str(NOT_OPENAI_PROMPT);
        }
    }
    prompt
}

pub async fn chat_reply(state: &AppState, user_input: &str) -> String {
    let language = detect_language(user_input);

    if let Some(reply) = canned_reply(user_input, language) {
        info!("Answered chat with canned reply (language={})", language.as_str());
        return reply.to_string();
    }

    let config = &state.config;
    let request = ChatCompletionRequest {
        model: config.chat_model.clone(),
        messages: vec![
            ChatMessage::system(build_system_prompt(language)),
            ChatMessage::user(user_input),
        ],
        temperature: config.chat_temperature,
        max_tokens: config.chat_max_tokens,
    };

    let result = call_chat_completion(
        &state.http,
        &config.chat_completions_url(),
        &config.provider_api_key,
        config.chat_timeout,
        &request,
    )
    .await;

    match result {
        Ok(Some(content)) => content,
        Ok(None) => {
            warn!("Chat completion returned no choices");
            CHAT_FALLBACK_REPLY.to_string()
        }
        Err(ProviderError::Transport(err)) => {
            warn!("Chat completion transport failure: {err}");
            format!("Error: {err}")
        }
        Err(err) => {
            warn!("Chat completion failed: {err}");
            CHAT_FALLBACK_REPLY.to_string()
        }
    }
}
