// src/llm/openai_compat/response.rs
// OpenAI-compatible chat response parsing

use crate::llm::{ChatResult, LlmError, Usage};
use serde::Deserialize;

/// Non-streaming chat response (OpenAI-compatible format)
#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<ResponseChoice>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct ResponseChoice {
    pub message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
}

/// Parse an OpenAI-compatible chat response into a ChatResult.
///
/// Only the first choice is used; any further candidates are dropped.
pub fn parse_chat_response(
    response_body: &str,
    request_id: &str,
    duration_ms: u64,
) -> Result<ChatResult, LlmError> {
    let data: ChatResponse =
        serde_json::from_str(response_body).map_err(|e| LlmError::Parse(e.to_string()))?;

    let content = data
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content);

    Ok(ChatResult {
        request_id: request_id.to_owned(),
        content,
        usage: data.usage,
        duration_ms,
    })
}
