// src/llm/openai.rs
// OpenAI chat-completions client

use async_trait::async_trait;
use std::time::{Duration, Instant};
use tracing::{debug, info};
use uuid::Uuid;

use super::openai_compat::{ChatRequest, parse_chat_response};
use super::{ChatResult, LlmClient, LlmError, LlmHttpClient, Message};
use crate::config::LlmConfig;
use crate::config::llm::{DEFAULT_BASE_URL, DEFAULT_MODEL};

/// OpenAI (or OpenAI-compatible) chat-completions client
pub struct OpenAiClient {
    http: LlmHttpClient,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenAiClient {
    pub fn new(api_key: impl Into<String>, timeout: Duration) -> Self {
        Self {
            http: LlmHttpClient::new(timeout),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Build a client from config; `None` when no API key is configured
    pub fn from_config(config: &LlmConfig) -> Option<Self> {
        let api_key = config.api_key.as_ref()?;
        Some(
            Self::new(api_key.clone(), config.timeout())
                .with_base_url(&config.base_url)
                .with_model(&config.model),
        )
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait]
impl LlmClient for OpenAiClient {
    async fn chat(
        &self,
        messages: Vec<Message>,
        temperature: f32,
    ) -> Result<ChatResult, LlmError> {
        let request_id = Uuid::new_v4().to_string();
        let start = Instant::now();

        let request = ChatRequest::new(&self.model, messages).with_temperature(temperature);
        let body = serde_json::to_string(&request).map_err(|e| LlmError::Parse(e.to_string()))?;

        debug!(
            request_id = %request_id,
            model = %self.model,
            messages = request.messages.len(),
            "OpenAI chat request"
        );

        let response_body = self
            .http
            .post_json(&request_id, &self.completions_url(), &self.api_key, body)
            .await?;

        let duration_ms = start.elapsed().as_millis() as u64;
        let result = parse_chat_response(&response_body, &request_id, duration_ms)?;

        if let Some(usage) = &result.usage {
            info!(
                request_id = %request_id,
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                duration_ms,
                "OpenAI chat complete"
            );
        }

        Ok(result)
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }

    fn model(&self) -> &str {
        &self.model
    }
}
