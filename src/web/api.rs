// src/web/api.rs
// Home, health and context inspection handlers

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use serde_json::json;
use tracing::info;

use crate::context::ContextSnapshot;
use crate::web::error::ApiResult;
use crate::web::state::AppState;

// ═══════════════════════════════════════
// HEALTH & HOME
// ═══════════════════════════════════════

pub async fn home(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "name": "Network Gemini",
        "version": env!("CARGO_PKG_VERSION"),
        "chat_configured": state.relay.is_configured(),
        "endpoints": ["/upload", "/chat", "/api/context", "/health"]
    }))
}

pub async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

// ═══════════════════════════════════════
// CONTEXT
// ═══════════════════════════════════════

pub async fn get_context(State(state): State<AppState>) -> Json<ContextSnapshot> {
    Json(state.store.snapshot().await)
}

pub async fn get_context_slot(
    State(state): State<AppState>,
    Path(slot): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let text = state.store.get_named(&slot).await?;
    Ok(Json(json!({
        "slot": slot,
        "text": text
    })))
}

pub async fn clear_context(State(state): State<AppState>) -> impl IntoResponse {
    state.store.clear().await;
    info!("Context store cleared");
    Json(json!({ "status": "cleared" }))
}
