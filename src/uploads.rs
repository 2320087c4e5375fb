/**
 * Upload Storage
 *
 * Stores uploaded images in a fixed local directory. Stored filenames are
 * `{epoch-millis}-{original-name}`; two uploads of the same name in the
 * same millisecond collide, which is accepted for this storage.
 */

use std::path::{Path, PathBuf};

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::Json,
};
use chrono::Utc;
use serde::Serialize;

use crate::error::AppError;

/// Disk-backed storage for uploaded files
#[derive(Debug, Clone)]
pub struct DiskStorage {
    root: PathBuf,
}

impl DiskStorage {
    /// Create a storage rooted at the given directory
    ///
    /// The directory is created lazily on the first save.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory files are stored under
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Stored filename for an original name: `{epoch-millis}-{original}`
    pub fn stored_filename(original: &str) -> String {
        format!("{}-{}", Utc::now().timestamp_millis(), original)
    }

    /// Save a file's bytes under a timestamped name
    ///
    /// # Returns
    ///
    /// The full path of the stored file.
    pub async fn save(&self, original: &str, bytes: &[u8]) -> std::io::Result<PathBuf> {
        tokio::fs::create_dir_all(&self.root).await?;

        let path = self.root.join(Self::stored_filename(original));
        tokio::fs::write(&path, bytes).await?;

        tracing::info!("Stored upload at {}", path.display());
        Ok(path)
    }
}

/// Response for a successful upload
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    /// Always "success"
    pub status: String,
    /// Stored filenames, one per uploaded file field
    pub payload: Vec<String>,
}

/// Upload handler for `POST /api/uploads`
///
/// Saves every file field of the multipart body and returns the stored
/// filenames. Fields without a filename are skipped.
///
/// # Errors
///
/// * `400 Bad Request` - malformed multipart body
/// * `500 Internal Server Error` - filesystem failure
pub async fn upload_images(
    State(storage): State<DiskStorage>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let mut stored = Vec::new();

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        tracing::warn!("Malformed multipart body: {}", e);
        AppError::handler(StatusCode::BAD_REQUEST, "Malformed multipart body")
    })? {
        let Some(original) = field.file_name().map(str::to_owned) else {
            continue;
        };

        let bytes = field.bytes().await.map_err(|e| {
            tracing::warn!("Failed to read multipart field: {}", e);
            AppError::handler(StatusCode::BAD_REQUEST, "Malformed multipart body")
        })?;

        let path = storage.save(&original, &bytes).await?;
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            stored.push(name.to_string());
        }
    }

    if stored.is_empty() {
        return Err(AppError::handler(
            StatusCode::BAD_REQUEST,
            "No file was uploaded",
        ));
    }

    Ok(Json(UploadResponse {
        status: "success".to_string(),
        payload: stored,
    }))
}
