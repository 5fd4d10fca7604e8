use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub storage: StorageMode,
    pub upload: UploadPolicy,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_address: String,
}

/// How uploads are persisted. Decided once at startup, never re-sniffed
/// per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageMode {
    /// Retain upload bytes in memory for an external uploader (read-only
    /// filesystems, e.g. serverless platforms).
    BufferPassthrough,
    /// Write uploads under the configured upload directory.
    Disk,
}

/// Upload validation and placement policy, immutable after load.
#[derive(Debug, Clone)]
pub struct UploadPolicy {
    /// Maximum accepted file size in bytes
    pub max_file_size: u64,
    /// Base directory for stored uploads
    pub upload_dir: String,
    /// Allowed extensions per category, lowercase, no dot
    pub allowed_image_types: Vec<String>,
    pub allowed_audio_types: Vec<String>,
    pub allowed_video_types: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3000".to_string(),
        }
    }
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            max_file_size: 10 * 1024 * 1024,
            upload_dir: "./uploads".to_string(),
            allowed_image_types: parse_type_list("jpg,jpeg,png,gif,webp"),
            allowed_audio_types: parse_type_list("mp3,wav,ogg,m4a,aac"),
            allowed_video_types: parse_type_list("mp4,avi,mov,wmv,flv,webm,mkv"),
        }
    }
}

impl UploadPolicy {
    /// Human-readable summary of every allow-list, used in rejection
    /// messages so callers can self-correct.
    pub fn allowed_summary(&self) -> String {
        format!(
            "Images ({}), Audio ({}), Video ({})",
            self.allowed_image_types.join(", "),
            self.allowed_audio_types.join(", "),
            self.allowed_video_types.join(", ")
        )
    }
}

impl StorageMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "buffer" | "passthrough" => Some(StorageMode::BufferPassthrough),
            "disk" | "local" => Some(StorageMode::Disk),
            _ => None,
        }
    }
}

/// Split a comma-separated extension list: trimmed, lowercased, empty
/// entries dropped.
fn parse_type_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Markers set by serverless platforms whose filesystems are read-only.
fn serverless_environment() -> bool {
    ["VERCEL", "VERCEL_ENV", "AWS_LAMBDA_FUNCTION_NAME", "NETLIFY"]
        .iter()
        .any(|key| std::env::var(key).is_ok())
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let bind_address = std::env::var("BIND_ADDRESS").unwrap_or_else(|_| {
            let port = std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(3000);
            format!("0.0.0.0:{port}")
        });

        let max_file_size = std::env::var("MAX_FILE_SIZE")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(10 * 1024 * 1024); // 10MB

        let upload_dir = std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "./uploads".to_string());

        let allowed_image_types = std::env::var("ALLOWED_IMAGE_TYPES")
            .map(|raw| parse_type_list(&raw))
            .unwrap_or_else(|_| parse_type_list("jpg,jpeg,png,gif,webp"));
        let allowed_audio_types = std::env::var("ALLOWED_AUDIO_TYPES")
            .map(|raw| parse_type_list(&raw))
            .unwrap_or_else(|_| parse_type_list("mp3,wav,ogg,m4a,aac"));
        let allowed_video_types = std::env::var("ALLOWED_VIDEO_TYPES")
            .map(|raw| parse_type_list(&raw))
            .unwrap_or_else(|_| parse_type_list("mp4,avi,mov,wmv,flv,webm,mkv"));

        let storage = std::env::var("STORAGE_MODE")
            .ok()
            .and_then(|s| StorageMode::parse(&s))
            .unwrap_or_else(|| {
                if serverless_environment() {
                    StorageMode::BufferPassthrough
                } else {
                    StorageMode::Disk
                }
            });

        let config = Config {
            server: ServerConfig { bind_address },
            storage,
            upload: UploadPolicy {
                max_file_size,
                upload_dir,
                allowed_image_types,
                allowed_audio_types,
                allowed_video_types,
            },
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.upload.max_file_size == 0 {
            return Err(ConfigError::ValidationError(
                "MAX_FILE_SIZE must be greater than 0".to_string(),
            ));
        }

        for (name, list) in [
            ("ALLOWED_IMAGE_TYPES", &self.upload.allowed_image_types),
            ("ALLOWED_AUDIO_TYPES", &self.upload.allowed_audio_types),
            ("ALLOWED_VIDEO_TYPES", &self.upload.allowed_video_types),
        ] {
            if list.is_empty() {
                tracing::warn!("{name} is empty; that category will reject every upload");
            }
        }

        Ok(())
    }
}
