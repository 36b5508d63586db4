use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;

use crate::{
    api::state::AppState,
    error::{AppError, Result},
    uploads,
};

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub success: bool,
    pub url: String,
}

/// Accepts a multipart form with a `file` part, stores the image, and
/// returns the relative URL content records keep as a string field.
pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid multipart payload: {}", e)))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or("upload").to_string();
        let content_type = field.content_type().map(|mime| mime.to_string());

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("Failed to read file: {}", e)))?;

        let url = uploads::save_uploaded_file(
            &state.settings.uploads.dir,
            &filename,
            content_type.as_deref(),
            &data,
        )
        .await?;

        return Ok(Json(UploadResponse { success: true, url }));
    }

    Err(AppError::BadRequest("No file provided".to_string()))
}
