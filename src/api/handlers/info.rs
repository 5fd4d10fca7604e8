use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::response::ApiResponse;
use crate::media::format_size;
use crate::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadInfo {
    pub max_file_size: u64,
    pub max_file_size_formatted: String,
    pub allowed_image_types: Vec<String>,
    pub allowed_audio_types: Vec<String>,
    pub allowed_video_types: Vec<String>,
}

/// Echo the upload policy so clients can validate before sending bytes.
pub async fn upload_info(State(state): State<Arc<AppState>>) -> Json<ApiResponse<UploadInfo>> {
    let policy = &state.config.upload;

    ApiResponse::success(UploadInfo {
        max_file_size: policy.max_file_size,
        max_file_size_formatted: format_size(policy.max_file_size),
        allowed_image_types: policy.allowed_image_types.clone(),
        allowed_audio_types: policy.allowed_audio_types.clone(),
        allowed_video_types: policy.allowed_video_types.clone(),
    })
}
