// src/config/llm.rs
// Chat-completion provider configuration

use std::fmt;
use std::time::Duration;

use crate::error::{GeminiError, Result};

use super::helpers::{Lookup, env_or, env_parsed, read_key};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_TEMPERATURE: f32 = 0.4;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Per-slot character budget for context excerpts in the system prompt
pub const DEFAULT_PROMPT_CHAR_BUDGET: usize = 6000;

/// LLM provider configuration
#[derive(Clone)]
pub struct LlmConfig {
    /// OPENAI_API_KEY; `None` leaves the chat relay unconfigured
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    pub timeout_secs: u64,
    pub prompt_char_budget: usize,
}

impl LlmConfig {
    pub fn from_lookup(lookup: Lookup<'_>) -> Self {
        Self {
            api_key: read_key(lookup, "OPENAI_API_KEY"),
            base_url: env_or(lookup, "OPENAI_BASE_URL", DEFAULT_BASE_URL)
                .trim_end_matches('/')
                .to_string(),
            model: env_or(lookup, "OPENAI_MODEL", DEFAULT_MODEL),
            temperature: env_parsed(lookup, "NG_TEMPERATURE", DEFAULT_TEMPERATURE),
            timeout_secs: env_parsed(lookup, "NG_PROVIDER_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS),
            prompt_char_budget: env_parsed(
                lookup,
                "NG_PROMPT_CHAR_BUDGET",
                DEFAULT_PROMPT_CHAR_BUDGET,
            ),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(GeminiError::Config(
                "NG_TEMPERATURE must be between 0.0 and 2.0".to_string(),
            ));
        }
        if self.timeout_secs == 0 {
            return Err(GeminiError::Config(
                "NG_PROVIDER_TIMEOUT_SECS must be non-zero".to_string(),
            ));
        }
        if self.prompt_char_budget == 0 {
            return Err(GeminiError::Config(
                "NG_PROMPT_CHAR_BUDGET must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self::from_lookup(&|_| None)
    }
}

// Never print the key itself
impl fmt::Debug for LlmConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LlmConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("timeout_secs", &self.timeout_secs)
            .field("prompt_char_budget", &self.prompt_char_budget)
            .finish()
    }
}
