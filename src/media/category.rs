use serde::{Deserialize, Serialize};

use crate::config::UploadPolicy;

/// Media category derived from a filename's extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaCategory {
    Audio,
    Image,
    Video,
}

impl MediaCategory {
    /// Subdirectory name under the upload directory for this category.
    pub fn subdirectory(self) -> &'static str {
        match self {
            MediaCategory::Audio => "audio",
            MediaCategory::Image => "images",
            MediaCategory::Video => "video",
        }
    }
}

/// Extension of a filename: the substring after the last dot, lowercased.
/// A name without a dot yields the empty string.
pub fn extension(filename: &str) -> String {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .unwrap_or_default()
}

/// Classify a filename against the policy's allow-lists.
///
/// Lists are tested in a fixed order (image, audio, video) and the first
/// match wins. An extension in no list, including the empty extension,
/// yields `None`.
pub fn classify(filename: &str, policy: &UploadPolicy) -> Option<MediaCategory> {
    let ext = extension(filename);

    if policy.allowed_image_types.iter().any(|e| *e == ext) {
        return Some(MediaCategory::Image);
    }
    if policy.allowed_audio_types.iter().any(|e| *e == ext) {
        return Some(MediaCategory::Audio);
    }
    if policy.allowed_video_types.iter().any(|e| *e == ext) {
        return Some(MediaCategory::Video);
    }

    None
}
