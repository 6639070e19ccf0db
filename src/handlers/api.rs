use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::assistant::{chat_reply, image_reply};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ChatBody {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ImageBody {
    #[serde(default)]
    pub prompt: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ReplyResponse {
    pub response: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn bad_request(message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
        .into_response()
}

/// Unparseable bodies count as a missing field.
fn required_text<T>(
    body: Result<Json<T>, JsonRejection>,
    field: impl FnOnce(T) -> Option<String>,
) -> Option<String> {
    let Json(value) = body
        .map_err(|rejection| debug!("Rejected request body: {rejection}"))
        .ok()?;
    field(value).filter(|text| !text.is_empty())
}

pub async fn chat_endpoint(
    State(state): State<AppState>,
    body: Result<Json<ChatBody>, JsonRejection>,
) -> Response {
    let Some(message) = required_text(body, |body: ChatBody| body.message) else {
        return bad_request("No message provided");
    };

    let response = chat_reply(&state, &message).await;
    Json(ReplyResponse { response }).into_response()
}

pub async fn generate_image_endpoint(
    State(state): State<AppState>,
    body: Result<Json<ImageBody>, JsonRejection>,
) -> Response {
    let Some(prompt) = required_text(body, |body: ImageBody| body.prompt) else {
        return bad_request("No prompt provided");
    };

    let response = image_reply(&state, &prompt).await;
    Json(ReplyResponse { response }).into_response()
}

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
