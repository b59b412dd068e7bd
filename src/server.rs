//! Server runtime: tracing setup, store wiring, listener and graceful shutdown.

use std::future::IntoFuture;
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::application::UserService;
use crate::config::{AppConfig, LogFormat};
use crate::infrastructure::JsonFileStore;
use crate::interfaces::http::create_router;
use crate::shared::ShutdownSignal;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Install the global subscriber. `RUST_LOG` wins over the configured level.
pub fn init_tracing(cfg: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.logging.level));

    let result = match cfg.logging.format {
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .try_init(),
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).try_init(),
    };
    if let Err(e) = result {
        eprintln!("tracing already initialised: {e}");
    }
}

/// Serve until SIGTERM/SIGINT, then drain for at most `shutdown_timeout`.
pub async fn run(cfg: AppConfig) -> Result<(), ServerError> {
    let store = Arc::new(JsonFileStore::new(cfg.storage.data_file.clone()));
    info!("💾 User data file: {}", store.path().display());
    if cfg.is_development() {
        warn!("Development mode: internal error details are exposed in responses");
    }

    let router = create_router(UserService::new(store), cfg.is_development());

    let address = cfg.address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .map_err(|source| ServerError::Bind {
            address: address.clone(),
            source,
        })?;
    info!("🚀 Server listening on http://{}", address);
    info!("🏠 Home page: http://{}/", address);
    info!("📝 Creation form: http://{}/formulaire", address);

    let shutdown = ShutdownSignal::new();
    shutdown.listen_for_os_signals();

    let graceful = shutdown.clone();
    let serve = axum::serve(listener, router)
        .with_graceful_shutdown(async move { graceful.wait().await })
        .into_future();
    tokio::pin!(serve);

    let timeout = Duration::from_secs(cfg.server.shutdown_timeout);
    tokio::select! {
        result = &mut serve => result?,
        _ = async {
            shutdown.wait().await;
            tokio::time::sleep(timeout).await;
        } => {
            warn!("Graceful shutdown timed out after {}s", timeout.as_secs());
        }
    }

    info!("👋 Server stopped");
    Ok(())
}
