// src/llm/http_client.rs
// Shared HTTP client configuration for the chat-completion provider

use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

use super::LlmError;

/// Default connect timeout
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Thin wrapper over reqwest with bounded timeouts.
///
/// Sends a single attempt per call. Transient failures are reported to the
/// caller, which decides how to degrade.
pub struct LlmHttpClient {
    client: Client,
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
}

impl LlmHttpClient {
    pub fn new(request_timeout: Duration) -> Self {
        Self::with_connect_timeout(
            request_timeout,
            Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS).min(request_timeout),
        )
    }

    pub fn with_connect_timeout(request_timeout: Duration, connect_timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(request_timeout)
            .connect_timeout(connect_timeout)
            .build()
            .unwrap_or_else(|e| {
                warn!(error = %e, "Failed to build HTTP client with timeouts, using defaults");
                Client::new()
            });

        Self {
            client,
            request_timeout,
            connect_timeout,
        }
    }

    /// POST a JSON body with Bearer auth, returning the response text on 2xx
    pub async fn post_json(
        &self,
        request_id: &str,
        url: &str,
        api_key: &str,
        body: String,
    ) -> Result<String, LlmError> {
        debug!(request_id = %request_id, url = %url, bytes = body.len(), "Sending provider request");

        let response = self
            .client
            .post(url)
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .timeout(self.request_timeout)
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(LlmError::Status {
                status: status.as_u16(),
                body: error_body,
            });
        }

        Ok(response.text().await?)
    }
}
