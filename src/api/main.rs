use anyhow::Context;
use tracing::{error, info, warn};

use geodish_api::config::AppConfig;
use geodish_api::middleware::{create_cors_layer, init_tracing};
use geodish_api::routes::{create_app, create_app_state};
use geodish_api::storage;

// Panic hook to route panics through tracing
fn setup_panic_hook() {
    std::panic::set_hook(Box::new(|panic_info| {
        let message = panic_info
            .payload()
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| panic_info.payload().downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "<non-string panic payload>".to_string());
        match panic_info.location() {
            Some(location) => error!(
                "PANIC at {}:{}:{}: {}",
                location.file(),
                location.line(),
                location.column(),
                message
            ),
            None => error!("PANIC: {}", message),
        }
    }));
}

#[tokio::main(flavor = "multi_thread")]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("Invalid configuration")?;

    init_tracing(config.log_format)
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))?;
    setup_panic_hook();
    info!("GeoDish API starting...");

    let storage = storage::connect(&config)
        .await
        .context("Failed to initialize storage")?;
    storage
        .health_check()
        .await
        .context("Storage health check failed")?;
    info!("Using {} storage backend", storage.backend_name());

    let app_state = create_app_state(storage, config.static_dir.clone())
        .context("Failed to load seed catalog")?;

    if config.seed_on_startup {
        let outcome = app_state
            .seeder
            .seed(false)
            .await
            .context("Startup seed failed")?;
        info!("Startup seed: {}", outcome);
    }

    if !config.static_dir.join("index.html").exists() {
        warn!(
            "No index.html in {:?}; GET / will return 500 until one is added",
            config.static_dir
        );
    }

    let cors = create_cors_layer(&config.cors_allowed_origins)
        .context("Invalid CORS_ALLOWED_ORIGINS")?;
    let app = create_app(app_state, cors);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind listener on {}", addr))?;
    info!("Server listening on {}", addr);
    info!("Health check available at http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

// Resolves on SIGINT (Ctrl+C) or SIGTERM (Docker stop)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("SIGINT received, shutting down gracefully"),
        _ = terminate => info!("SIGTERM received, shutting down gracefully"),
    }
}
