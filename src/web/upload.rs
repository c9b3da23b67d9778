// src/web/upload.rs
// Multipart upload of network log, network data and alarm files

use axum::{
    Json,
    extract::{Multipart, State, multipart::MultipartRejection},
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::context::Slot;
use crate::error::GeminiError;
use crate::web::error::{ApiError, ApiResult};
use crate::web::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct UploadResponse {
    pub status: String,
    /// Slots written by this upload, in the order first received
    pub stored: Vec<Slot>,
    pub summary: Option<String>,
}

/// Decode as UTF-8, dropping any undecodable bytes
pub fn decode_text(bytes: &[u8]) -> String {
    bytes.utf8_chunks().map(|chunk| chunk.valid()).collect()
}

pub async fn upload(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> ApiResult<Json<UploadResponse>> {
    let mut multipart = multipart.map_err(|e| ApiError::with_status(e.status(), e.body_text()))?;
    let mut entries: Vec<(Slot, String)> = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::with_status(e.status(), e.body_text()))?
    {
        let Some(name) = field.name().map(str::to_owned) else {
            debug!("Skipping unnamed multipart field");
            continue;
        };
        let Ok(slot) = name.parse::<Slot>() else {
            debug!(field = %name, "Ignoring unknown upload field");
            continue;
        };

        // Browsers send an empty, unnamed part for "no file chosen"
        let has_file_name = field.file_name().is_some_and(|f| !f.is_empty());
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::with_status(e.status(), e.body_text()))?;
        if bytes.is_empty() && !has_file_name {
            debug!(slot = %slot, "Skipping empty upload part");
            continue;
        }

        entries.push((slot, decode_text(&bytes)));
    }

    if entries.is_empty() {
        return Err(GeminiError::NoFilesProvided.into());
    }

    let mut stored: Vec<Slot> = Vec::new();
    for (slot, _) in &entries {
        if !stored.contains(slot) {
            stored.push(*slot);
        }
    }

    let snapshot = state.store.put_many(entries).await;
    info!(slots = ?stored, "Context updated from upload");

    Ok(Json(UploadResponse {
        status: "ok".to_string(),
        stored,
        summary: snapshot.summary,
    }))
}
