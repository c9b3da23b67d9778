// src/error.rs
// Error taxonomy for the context store, chat relay and upload surface

use thiserror::Error;

use crate::llm::LlmError;

/// Main error type for Network Gemini
#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("message is required")]
    EmptyMessage,

    #[error("unknown context slot: {0}")]
    InvalidSlot(String),

    #[error("no files provided; expected at least one of network_log, network_data, alarm_data")]
    NoFilesProvided,

    #[error("OPENAI_API_KEY is not set on the server")]
    NotConfigured,

    #[error("provider error: {0}")]
    ProviderError(String),

    #[error("provider timed out")]
    ProviderTimeout,

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Convenience type alias for Result using GeminiError
pub type Result<T> = std::result::Result<T, GeminiError>;

impl GeminiError {
    /// Stable machine-readable code for HTTP error bodies
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyMessage => "EMPTY_MESSAGE",
            Self::InvalidSlot(_) => "INVALID_SLOT",
            Self::NoFilesProvided => "NO_FILES_PROVIDED",
            Self::NotConfigured => "NOT_CONFIGURED",
            Self::ProviderError(_) => "PROVIDER_ERROR",
            Self::ProviderTimeout => "PROVIDER_TIMEOUT",
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::Config(_) => "CONFIG_ERROR",
        }
    }
}

impl From<LlmError> for GeminiError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::Timeout => GeminiError::ProviderTimeout,
            other => GeminiError::ProviderError(other.to_string()),
        }
    }
}
