use axum::Json;
use chrono::Utc;
use serde::Serialize;

use crate::api::response::ApiError;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub success: bool,
    pub message: String,
    pub timestamp: String,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        success: true,
        message: "Server is running".to_string(),
        timestamp: Utc::now().to_rfc3339(),
    })
}

/// Service index with the endpoint map.
pub async fn api_index() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "success": true,
        "message": "File Upload API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "health": "/health",
            "uploadInfo": "/api/upload/info",
            "uploadSingle": "/api/upload/single",
            "uploadMultiple": "/api/upload/multiple",
        },
    }))
}

pub async fn route_not_found() -> ApiError {
    ApiError::not_found("Route not found")
}
