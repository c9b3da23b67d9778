// src/relay/mod.rs
// Chat relay: user message + stored context -> one provider call -> reply

pub mod prompt;

use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, instrument, warn};

use crate::config::LlmConfig;
use crate::context::ContextStore;
use crate::error::{GeminiError, Result};
use crate::llm::{LlmClient, LlmError, Message};

/// Returned instead of an error whenever the provider cannot answer
pub const FALLBACK_REPLY: &str =
    "Network Gemini could not reach the language model right now. Please try again in a moment.";

/// Tunables for a relay call
#[derive(Debug, Clone)]
pub struct RelaySettings {
    pub temperature: f32,
    /// Per-slot character budget for context excerpts
    pub char_budget: usize,
    /// Upper bound on the provider call, enforced on top of the HTTP timeout
    pub timeout: Duration,
}

impl From<&LlmConfig> for RelaySettings {
    fn from(config: &LlmConfig) -> Self {
        Self {
            temperature: config.temperature,
            char_budget: config.prompt_char_budget,
            timeout: config.timeout(),
        }
    }
}

impl Default for RelaySettings {
    fn default() -> Self {
        Self::from(&LlmConfig::default())
    }
}

/// Outcome of a relayed chat
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelayReply {
    pub text: String,
    /// True when `text` is the fallback message, not provider output
    pub fallback: bool,
}

impl RelayReply {
    fn answer(text: String) -> Self {
        Self {
            text,
            fallback: false,
        }
    }

    fn fallback() -> Self {
        Self {
            text: FALLBACK_REPLY.to_string(),
            fallback: true,
        }
    }
}

pub struct ChatRelay {
    store: ContextStore,
    client: Option<Arc<dyn LlmClient>>,
    settings: RelaySettings,
}

impl ChatRelay {
    pub fn new(
        store: ContextStore,
        client: Option<Arc<dyn LlmClient>>,
        settings: RelaySettings,
    ) -> Self {
        Self {
            store,
            client,
            settings,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    /// Relay one user message.
    ///
    /// Errors only for caller mistakes (`EmptyMessage`) or a missing
    /// credential (`NotConfigured`). Provider failures come back as
    /// `Ok` with the fallback reply.
    #[instrument(skip_all, fields(chars = message.chars().count()))]
    pub async fn relay(&self, message: &str) -> Result<RelayReply> {
        let message = message.trim();
        if message.is_empty() {
            return Err(GeminiError::EmptyMessage);
        }

        let client = self.client.as_ref().ok_or(GeminiError::NotConfigured)?;

        // Snapshot releases the read lock before the provider call
        let snapshot = self.store.snapshot().await;
        let system = prompt::build_system_prompt(&snapshot, self.settings.char_budget);
        let messages = vec![Message::system(system), Message::user(message)];

        let outcome = tokio::time::timeout(
            self.settings.timeout,
            client.chat(messages, self.settings.temperature),
        )
        .await
        .unwrap_or(Err(LlmError::Timeout));

        match outcome {
            Ok(result) => match result.content.filter(|text| !text.trim().is_empty()) {
                Some(text) => {
                    info!(
                        request_id = %result.request_id,
                        provider = client.provider_name(),
                        duration_ms = result.duration_ms,
                        "Relayed chat reply"
                    );
                    Ok(RelayReply::answer(text))
                }
                None => {
                    warn!(request_id = %result.request_id, "Provider returned no reply, using fallback");
                    Ok(RelayReply::fallback())
                }
            },
            Err(e) => {
                let err = GeminiError::from(e);
                warn!(error = %err, provider = client.provider_name(), "Provider call failed, using fallback");
                Ok(RelayReply::fallback())
            }
        }
    }
}
