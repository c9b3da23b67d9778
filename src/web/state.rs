// src/web/state.rs
// Web server state management

use std::sync::Arc;
use tracing::info;

use crate::config::AppConfig;
use crate::context::ContextStore;
use crate::llm::{LlmClient, OpenAiClient};
use crate::relay::{ChatRelay, RelaySettings};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Latest uploaded network context
    pub store: ContextStore,

    /// Chat relay reading from `store`
    pub relay: Arc<ChatRelay>,
}

impl AppState {
    /// Create state around an existing store and optional provider client
    pub fn new(
        store: ContextStore,
        client: Option<Arc<dyn LlmClient>>,
        settings: RelaySettings,
    ) -> Self {
        let relay = Arc::new(ChatRelay::new(store.clone(), client, settings));
        Self { store, relay }
    }

    /// Wire up an OpenAI client when a key is configured
    pub fn from_config(config: &AppConfig) -> Self {
        let client = OpenAiClient::from_config(&config.llm).map(|c| {
            info!(model = %c.model(), "Chat provider configured");
            Arc::new(c) as Arc<dyn LlmClient>
        });

        Self::new(
            ContextStore::new(),
            client,
            RelaySettings::from(&config.llm),
        )
    }
}
