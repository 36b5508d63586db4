use std::path::PathBuf;

use tokio::fs;
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

use crate::error::{AppError, Result};

/// Allowed image extensions
const ALLOWED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// Maximum file size (5 MB)
const MAX_FILE_SIZE: usize = 5 * 1024 * 1024;

/// Save an uploaded image to the uploads directory.
/// Returns the relative path to the file (e.g., "uploads/abc123.jpg"),
/// which content records store as their image URL.
pub async fn save_uploaded_file(
    uploads_dir: &str,
    filename: &str,
    content_type: Option<&str>,
    data: &[u8],
) -> Result<String> {
    if data.len() > MAX_FILE_SIZE {
        return Err(AppError::Validation(
            "Image must be less than 5MB".to_string(),
        ));
    }

    if let Some(mime) = content_type {
        if !matches!(mime, "image/jpeg" | "image/jpg" | "image/png") {
            return Err(AppError::Validation(
                "Only PNG and JPG images are allowed".to_string(),
            ));
        }
    }

    let extension = filename
        .rsplit('.')
        .next()
        .map(|s| s.to_lowercase())
        .ok_or_else(|| AppError::Validation("Invalid filename".to_string()))?;

    if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
        return Err(AppError::Validation(format!(
            "Invalid file type. Allowed: {}",
            ALLOWED_EXTENSIONS.join(", ")
        )));
    }

    // Ensure uploads directory exists
    let uploads_path = PathBuf::from(uploads_dir);
    fs::create_dir_all(&uploads_path)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to create uploads directory: {}", e)))?;

    // Generate unique filename
    let new_filename = format!("{}.{}", Uuid::new_v4(), extension);
    let file_path = uploads_path.join(&new_filename);

    let mut file = fs::File::create(&file_path)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to create file: {}", e)))?;

    file.write_all(data)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to write file: {}", e)))?;

    // Return relative path for storing in database
    Ok(format!("uploads/{}", new_filename))
}
