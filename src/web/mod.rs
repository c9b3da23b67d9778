// src/web/mod.rs
// Web server layer for Network Gemini

pub mod api;
pub mod chat;
pub mod error;
pub mod state;
pub mod upload;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::web::state::AppState;

/// Create the web server router
pub fn create_router(state: AppState, upload_limit_bytes: usize) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API routes (REST)
    let api_router = Router::new()
        .route(
            "/context",
            get(api::get_context).delete(api::clear_context),
        )
        .route("/context/{slot}", get(api::get_context_slot))
        .route("/upload", post(upload::upload))
        .route("/chat", post(chat::chat));

    Router::new()
        .route("/", get(api::home))
        .route("/health", get(api::health))
        // Paths used by the bundled UI
        .route("/upload", post(upload::upload))
        .route("/chat", post(chat::chat))
        .nest("/api", api_router)
        .layer(DefaultBodyLimit::max(upload_limit_bytes))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
