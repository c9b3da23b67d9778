// src/lib.rs
// Network Gemini - network operations assistant backend

#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod config;
pub mod context;
pub mod error;
pub mod llm;
pub mod relay;
pub mod web;

pub use config::AppConfig;
pub use context::{ContextSnapshot, ContextStore, Slot};
pub use error::{GeminiError, Result};
pub use relay::{ChatRelay, RelayReply};
