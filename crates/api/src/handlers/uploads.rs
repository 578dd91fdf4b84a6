//! Media uploads into the public storage buckets.

use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use luther_core::uploads::{file_name_from_url, generate_file_name, Bucket};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::middleware::rbac::RequireEditor;
use crate::response::MutationResponse;
use crate::state::AppState;

/// A stored upload and where the site can load it from.
#[derive(Debug, Serialize)]
pub struct UploadedFile {
    pub bucket: &'static str,
    pub file_name: String,
    pub url: String,
}

/// Request body for `DELETE /admin/uploads/{bucket}`.
#[derive(Debug, Deserialize)]
pub struct DeleteUploadRequest {
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct DeleteUploadResult {
    pub removed: bool,
}

/// POST /api/v1/admin/uploads/{bucket}
///
/// Multipart form with a required `file` field. The file is stored under a
/// generated name and its public URL is returned.
pub async fn upload(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    AppPath(bucket): AppPath<String>,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<(StatusCode, Json<MutationResponse<UploadedFile>>)> {
    let bucket: Bucket = bucket.parse()?;
    let mut multipart = multipart?;
    let mut file_data: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }
        let original = field.file_name().unwrap_or_default().to_string();
        let data = field.bytes().await?;
        file_data = Some((original, data.to_vec()));
    }

    let (original, data) =
        file_data.ok_or_else(|| AppError::BadRequest("Missing required 'file' field".into()))?;

    let ext = bucket.accepted_extension(&original)?;
    if data.is_empty() {
        return Err(AppError::BadRequest("Uploaded file is empty".into()));
    }
    let max = state.config.max_upload_bytes;
    if data.len() > max {
        return Err(AppError::BadRequest(format!(
            "File is too large ({} bytes). Maximum is {max} bytes",
            data.len()
        )));
    }

    let file_name = generate_file_name(&ext, Utc::now().timestamp_millis());
    state
        .media
        .put(bucket, &file_name, &data)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to store upload: {e}")))?;

    let url = state.media.public_url(bucket, &file_name);
    tracing::info!(
        bucket = bucket.as_str(),
        file_name = %file_name,
        size = data.len(),
        user_id = user.user_id,
        "File uploaded"
    );

    Ok((
        StatusCode::CREATED,
        Json(MutationResponse {
            data: UploadedFile {
                bucket: bucket.as_str(),
                file_name,
                url,
            },
            message: "File uploaded successfully".to_string(),
        }),
    ))
}

/// DELETE /api/v1/admin/uploads/{bucket}
///
/// Removes the file a public URL points at. Deleting a file that is already
/// gone succeeds with `removed: false`.
pub async fn delete(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    AppPath(bucket): AppPath<String>,
    AppJson(input): AppJson<DeleteUploadRequest>,
) -> AppResult<Json<MutationResponse<DeleteUploadResult>>> {
    let bucket: Bucket = bucket.parse()?;
    let file_name = file_name_from_url(&input.url)
        .ok_or_else(|| AppError::BadRequest(format!("Not a storage URL: {}", input.url)))?;

    let removed = state
        .media
        .remove(bucket, file_name)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to remove upload: {e}")))?;

    tracing::info!(
        bucket = bucket.as_str(),
        file_name,
        removed,
        user_id = user.user_id,
        "File deleted"
    );

    let message = if removed {
        "File deleted successfully"
    } else {
        "File was already removed"
    };
    Ok(Json(MutationResponse {
        data: DeleteUploadResult { removed },
        message: message.to_string(),
    }))
}
