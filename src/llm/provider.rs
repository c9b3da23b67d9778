// src/llm/provider.rs
// LLM provider abstraction layer

use async_trait::async_trait;

use super::{ChatResult, LlmError, Message};

/// Trait for chat-completion clients
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Send exactly one chat completion request
    async fn chat(&self, messages: Vec<Message>, temperature: f32)
    -> Result<ChatResult, LlmError>;

    /// Provider name for logging
    fn provider_name(&self) -> &'static str;

    /// Model identifier sent to the provider
    fn model(&self) -> &str;
}
