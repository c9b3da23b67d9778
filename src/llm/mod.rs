// src/llm/mod.rs
// Chat-completion client layer: message types, provider trait, OpenAI client

pub mod http_client;
pub mod openai;
pub mod openai_compat;
pub mod provider;

pub use http_client::LlmHttpClient;
pub use openai::OpenAiClient;
pub use provider::LlmClient;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Role-tagged chat message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Token usage as reported by the provider
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    #[serde(default)]
    pub prompt_tokens: u32,
    #[serde(default)]
    pub completion_tokens: u32,
    #[serde(default)]
    pub total_tokens: u32,
}

/// Result of a single chat completion
#[derive(Debug, Clone)]
pub struct ChatResult {
    pub request_id: String,
    /// Text of the first choice, if the provider returned one
    pub content: Option<String>,
    pub usage: Option<Usage>,
    pub duration_ms: u64,
}

/// Failures talking to a chat-completion provider
#[derive(Error, Debug)]
pub enum LlmError {
    #[error("request timed out")]
    Timeout,

    #[error("transport error: {0}")]
    Transport(String),

    #[error("API error {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to parse chat response: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for LlmError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            LlmError::Timeout
        } else {
            LlmError::Transport(err.to_string())
        }
    }
}
