// src/web/error.rs
// Centralized error handling for HTTP API responses

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;
use tracing::{error, warn};

use crate::error::GeminiError;

/// Standard API error response format
#[derive(Debug)]
pub struct ApiError {
    pub message: String,
    pub status_code: StatusCode,
    pub error_code: Option<String>,
}

impl ApiError {
    /// Create a new bad request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status_code: StatusCode::BAD_REQUEST,
            error_code: Some("BAD_REQUEST".to_string()),
        }
    }

    /// Keep the status an extractor rejection chose (e.g. 413 from the body limit)
    pub fn with_status(status_code: StatusCode, message: impl Into<String>) -> Self {
        let error_code = match status_code {
            StatusCode::PAYLOAD_TOO_LARGE => "PAYLOAD_TOO_LARGE",
            s if s.is_client_error() => "BAD_REQUEST",
            _ => "INTERNAL_ERROR",
        };
        Self {
            message: message.into(),
            status_code,
            error_code: Some(error_code.to_string()),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

impl From<GeminiError> for ApiError {
    fn from(err: GeminiError) -> Self {
        let status_code = match &err {
            GeminiError::EmptyMessage
            | GeminiError::InvalidSlot(_)
            | GeminiError::NoFilesProvided
            | GeminiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            GeminiError::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            GeminiError::ProviderError(_)
            | GeminiError::ProviderTimeout
            | GeminiError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        Self {
            message: err.to_string(),
            status_code,
            error_code: Some(err.code().to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status_code.is_server_error() {
            error!(status = self.status_code.as_u16(), "{}", self.message);
        } else {
            warn!(status = self.status_code.as_u16(), "{}", self.message);
        }

        let mut response_json = json!({
            "error": true,
            "message": self.message,
            "status": self.status_code.as_u16()
        });

        if let Some(error_code) = self.error_code {
            response_json["error_code"] = json!(error_code);
        }

        (self.status_code, Json(response_json)).into_response()
    }
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;
