use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use media_upload_service::{
    api,
    config::{Config, StorageMode},
    media::format_size,
    store::{BufferStore, DiskStore, MediaStore},
    AppState,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let env_filter =
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());

    let log_format = std::env::var("LOG_FORMAT").unwrap_or_default();
    if log_format.eq_ignore_ascii_case("json") {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_span_list(false),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "media-upload-service starting"
    );

    // Load configuration
    let config = Config::load()?;
    info!(
        max_file_size = %format_size(config.upload.max_file_size),
        upload_dir = %config.upload.upload_dir,
        "Loaded upload policy"
    );

    // Initialize the storage backend
    let store: Arc<dyn MediaStore> = match config.storage {
        StorageMode::Disk => {
            let store = DiskStore::new(&config.upload.upload_dir)?;
            info!("Using disk storage at: {}", store.base_dir().display());
            Arc::new(store)
        }
        StorageMode::BufferPassthrough => {
            info!("Read-only environment; uploads will be buffered in memory");
            Arc::new(BufferStore::new())
        }
    };

    // Create shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        store,
    });

    // Build and start the HTTP server
    let app = api::create_router(Arc::clone(&state));
    let listener = tokio::net::TcpListener::bind(&config.server.bind_address).await?;
    info!("Listening on: {}", config.server.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, draining connections");
}
