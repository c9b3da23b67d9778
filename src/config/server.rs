// src/config/server.rs
// HTTP server configuration

use serde::{Deserialize, Serialize};

use crate::error::{GeminiError, Result};

use super::helpers::{Lookup, env_or, env_parsed};

/// Default upload body limit (16 MiB)
pub const DEFAULT_UPLOAD_LIMIT_BYTES: usize = 16 * 1024 * 1024;

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Maximum request body size accepted by the upload surface
    pub upload_limit_bytes: usize,
}

impl ServerConfig {
    pub fn from_lookup(lookup: Lookup<'_>) -> Self {
        Self {
            host: env_or(lookup, "NG_HOST", "0.0.0.0"),
            port: env_parsed(lookup, "NG_PORT", 5000),
            upload_limit_bytes: env_parsed(
                lookup,
                "NG_UPLOAD_LIMIT_BYTES",
                DEFAULT_UPLOAD_LIMIT_BYTES,
            ),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            return Err(GeminiError::Config(
                "NG_PORT must be non-zero".to_string(),
            ));
        }
        if self.upload_limit_bytes == 0 {
            return Err(GeminiError::Config(
                "NG_UPLOAD_LIMIT_BYTES must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::from_lookup(&|_| None)
    }
}
