// src/web/chat.rs
// Chat API handler

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde::{Deserialize, Serialize};

use crate::web::error::{ApiError, ApiResult};
use crate::web::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// Older clients send the text under `question`. A body carrying both is rejected
    #[serde(default, alias = "question")]
    pub message: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
    /// True when the provider was unavailable and `reply` is the fallback text
    pub fallback: bool,
}

pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> ApiResult<Json<ChatResponse>> {
    let Json(request) = payload.map_err(|e| ApiError::bad_request(e.body_text()))?;
    let message = request.message.unwrap_or_default();

    let reply = state.relay.relay(&message).await?;

    Ok(Json(ChatResponse {
        reply: reply.text,
        fallback: reply.fallback,
    }))
}
