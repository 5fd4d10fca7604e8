use std::sync::Arc;

use axum::extract::multipart::Field;
use axum::extract::{Multipart, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::Json;
use serde::Serialize;

use crate::api::response::{ApiError, ApiResponse};
use crate::media::{self, format_size, FileContent, IncomingFile, MediaCategory, UploadError};
use crate::store::{Persistence, StoredFile};
use crate::AppState;

/// Maximum number of files accepted by the batch endpoint.
pub const MAX_BATCH_SIZE: usize = 10;

// ============================================================================
// Types
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadData {
    pub original_name: String,
    pub filename: String,
    pub file_type: MediaCategory,
    pub size: u64,
    #[serde(rename = "mimetype")]
    pub mime_type: String,
    /// Absolute path on disk, or null when persistence was deferred
    pub path: Option<String>,
    /// Absolute public URL
    pub url: String,
    pub size_formatted: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

// ============================================================================
// Handlers
// ============================================================================

pub async fn upload_single(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<ApiResponse<UploadData>>), ApiError> {
    let mut file: Option<IncomingFile> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Invalid multipart data: {e}")))?
    {
        if field.name() == Some("file") {
            file = Some(read_file_field(field).await?);
        }
    }

    let classified = media::validate(file, &state.config.upload).map_err(|e| match e {
        UploadError::MissingFile => ApiError::bad_request(
            "No file uploaded. Please provide a file with the field name \"file\"",
        ),
        other => ApiError::from(other),
    })?;

    let record = state.store.store(classified).await?;
    let base = request_base(&headers);

    tracing::debug!(filename = %record.filename, "Uploaded file");

    Ok((
        StatusCode::CREATED,
        ApiResponse::with_message("File uploaded successfully", upload_data(record, &base)),
    ))
}

pub async fn upload_multiple(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<ApiResponse<Vec<UploadData>>>), ApiError> {
    let mut files: Vec<IncomingFile> = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Invalid multipart data: {e}")))?
    {
        if field.name() == Some("files") {
            if files.len() == MAX_BATCH_SIZE {
                return Err(ApiError::bad_request(format!(
                    "Too many files. At most {MAX_BATCH_SIZE} files can be uploaded per request"
                )));
            }
            files.push(read_file_field(field).await?);
        }
    }

    if files.is_empty() {
        return Err(ApiError::bad_request(
            "No files uploaded. Please provide files with the field name \"files\"",
        ));
    }

    // All-or-nothing: the first rejected file fails the whole batch.
    let classified = files
        .into_iter()
        .map(|file| media::validate(Some(file), &state.config.upload))
        .collect::<Result<Vec<_>, _>>()?;

    let records = state.store.store_all(classified).await?;
    let base = request_base(&headers);
    let count = records.len();

    tracing::debug!(count, "Uploaded file batch");

    Ok((
        StatusCode::CREATED,
        ApiResponse::with_message(
            format!("{count} file(s) uploaded successfully"),
            records
                .into_iter()
                .map(|record| upload_data(record, &base))
                .collect(),
        ),
    ))
}

// ============================================================================
// Helpers
// ============================================================================

async fn read_file_field(field: Field<'_>) -> Result<IncomingFile, ApiError> {
    let original_name = field.file_name().unwrap_or("upload").to_string();
    let declared_type = field.content_type().map(|s| s.to_string());

    let data = field
        .bytes()
        .await
        .map_err(|e| ApiError::bad_request(format!("Failed to read file: {e}")))?;

    // Prefer the declared content type, fall back to a guess from the
    // filename, then to octet-stream.
    let mime_type = declared_type
        .filter(|ct| ct != "application/octet-stream")
        .or_else(|| {
            mime_guess::from_path(&original_name)
                .first()
                .map(|m| m.to_string())
        })
        .unwrap_or_else(|| "application/octet-stream".to_string());

    Ok(IncomingFile {
        original_name,
        mime_type,
        size: data.len() as u64,
        content: FileContent::Buffer(data),
    })
}

/// Scheme + host for absolute URL assembly, from the proxy-aware headers.
fn request_base(headers: &HeaderMap) -> String {
    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("http");
    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("localhost");
    format!("{scheme}://{host}")
}

fn upload_data(record: StoredFile, base: &str) -> UploadData {
    let (path, note) = match &record.persistence {
        Persistence::Disk(path) => (Some(path.display().to_string()), None),
        Persistence::Deferred(_) => (
            None,
            Some(
                "File not persisted to local disk (read-only environment); \
                 bytes retained for deferred upload"
                    .to_string(),
            ),
        ),
    };

    UploadData {
        original_name: record.original_name,
        file_type: record.category,
        size: record.size,
        mime_type: record.mime_type,
        path,
        url: format!("{base}{}", record.url),
        size_formatted: format_size(record.size),
        note,
        filename: record.filename,
    }
}
