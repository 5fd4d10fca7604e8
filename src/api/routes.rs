use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use super::handlers;
use crate::config::StorageMode;
use crate::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    let max_file_size = state.config.upload.max_file_size as usize;
    // Body limits leave slack for multipart framing so policy-sized files
    // reach the validator and get its message instead of a bare 413.
    let single_limit = max_file_size + 64 * 1024;
    let multi_limit = max_file_size * handlers::MAX_BATCH_SIZE + 1024 * 1024;

    let mut router = Router::new()
        .route("/health", get(handlers::health))
        .route("/api", get(handlers::api_index))
        // Uploads
        .route("/api/upload/info", get(handlers::upload_info))
        .route(
            "/api/upload/single",
            post(handlers::upload_single).layer(DefaultBodyLimit::max(single_limit)),
        )
        .route(
            "/api/upload/multiple",
            post(handlers::upload_multiple).layer(DefaultBodyLimit::max(multi_limit)),
        );

    // Stored files are only on disk to serve in disk mode
    if state.config.storage == StorageMode::Disk {
        router = router.nest_service("/uploads", ServeDir::new(&state.config.upload.upload_dir));
    }

    router
        .fallback(handlers::route_not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
