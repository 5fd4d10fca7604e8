//! media-upload-service - A small HTTP service for validated media uploads
//!
//! This crate accepts single and batch multipart uploads with:
//! - Extension-based classification into image/audio/video categories
//! - Type and size policy enforcement before any bytes touch disk
//! - Collision-resistant stored filenames (timestamp + base-36 token)
//! - Swappable storage modes: local disk, or in-memory passthrough for
//!   read-only (serverless) filesystems

pub mod api;
pub mod config;
pub mod media;
pub mod store;

use std::sync::Arc;

use config::Config;

/// Shared application state
pub struct AppState {
    pub config: Config,
    pub store: Arc<dyn store::MediaStore>,
}
