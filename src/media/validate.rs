use std::path::PathBuf;

use bytes::Bytes;
use thiserror::Error;

use super::{classify, extension, format_size, MediaCategory};
use crate::config::UploadPolicy;

/// Why an upload was rejected before storage.
///
/// Callers branch on the variant, not the message text; the messages carry
/// enough detail (allow-lists, formatted limit) for the uploader to
/// self-correct.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("No file provided")]
    MissingFile,
    #[error("Unsupported file type '{extension}'. Allowed types: {allowed}")]
    UnsupportedType { extension: String, allowed: String },
    #[error("File size exceeds maximum allowed size of {}", format_size(*.limit))]
    FileTooLarge { limit: u64 },
}

/// Upload content as received: either buffered in memory or already staged
/// at a temporary path by the transport layer.
#[derive(Debug, Clone)]
pub enum FileContent {
    Buffer(Bytes),
    Staged(PathBuf),
}

/// One decoded multipart file part, before validation.
#[derive(Debug, Clone)]
pub struct IncomingFile {
    pub original_name: String,
    pub mime_type: String,
    pub size: u64,
    pub content: FileContent,
}

/// A size-checked file with its resolved category. Only values of this type
/// reach a [`crate::store::MediaStore`].
#[derive(Debug, Clone)]
pub struct ClassifiedFile {
    pub file: IncomingFile,
    pub category: MediaCategory,
}

/// Validate an incoming file against the upload policy.
///
/// Checks run in order and short-circuit: presence, supported type, then
/// size (strictly before any disk write). A file of exactly the maximum
/// size is accepted. The content is passed through untouched.
pub fn validate(
    file: Option<IncomingFile>,
    policy: &UploadPolicy,
) -> Result<ClassifiedFile, UploadError> {
    let file = file.ok_or(UploadError::MissingFile)?;

    let category =
        classify(&file.original_name, policy).ok_or_else(|| UploadError::UnsupportedType {
            extension: extension(&file.original_name),
            allowed: policy.allowed_summary(),
        })?;

    if file.size > policy.max_file_size {
        return Err(UploadError::FileTooLarge {
            limit: policy.max_file_size,
        });
    }

    Ok(ClassifiedFile { file, category })
}
