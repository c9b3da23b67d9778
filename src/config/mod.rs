// src/config/mod.rs
// Central configuration for Network Gemini, loaded from the environment

pub mod helpers;
pub mod llm;
pub mod server;

pub use llm::LlmConfig;
pub use server::ServerConfig;

use tracing::{info, warn};

/// Main configuration structure - composes all domain configs
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub llm: LlmConfig,
}

impl AppConfig {
    /// Load `.env` (if present) and read the process environment
    pub fn from_env() -> Self {
        // Don't fail if .env doesn't exist
        dotenvy::dotenv().ok();
        Self::from_lookup(&helpers::process_env)
    }

    pub fn from_lookup(lookup: helpers::Lookup<'_>) -> Self {
        Self {
            server: ServerConfig::from_lookup(lookup),
            llm: LlmConfig::from_lookup(lookup),
        }
    }

    /// Validate config on startup
    pub fn validate(&self) -> crate::error::Result<()> {
        self.server.validate()?;
        self.llm.validate()?;
        Ok(())
    }

    /// Log the effective configuration (without secrets)
    pub fn log_status(&self) {
        info!(
            bind = %self.server.bind_address(),
            model = %self.llm.model,
            temperature = self.llm.temperature,
            timeout_secs = self.llm.timeout_secs,
            prompt_char_budget = self.llm.prompt_char_budget,
            "Configuration loaded"
        );
        if !self.llm.is_configured() {
            warn!("OPENAI_API_KEY not set - chat requests will be rejected until it is configured");
        }
    }
}
