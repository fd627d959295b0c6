//! `boom-server`: demo user service returning boom errors.
//!
//! # Quick start
//!
//! ```sh
//! # Default port and admin token:
//! boom-server
//!
//! # Custom bind address and token:
//! BOOM_BIND=127.0.0.1:8080 BOOM_ADMIN_TOKEN=s3cret boom-server
//! ```
//!
//! # Environment variables
//!
//! See [`ServerConfig::from_env`] for the full list.

use std::process;
use std::sync::Arc;

use boom_http::{build_router, MemoryStorage, ServerConfig, Storage};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "boom_http=info,tower_http=debug".into()),
        )
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("invalid configuration: {e}");
            process::exit(2);
        }
    };

    let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
    tracing::info!("storage: in-memory (data will not survive restart)");

    let app = build_router(storage, config.clone());

    tracing::info!("listening on {}", config.bind_addr);
    let listener = match tokio::net::TcpListener::bind(config.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("failed to bind {}: {e}", config.bind_addr);
            process::exit(1);
        }
    };

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("server error: {e}");
        process::exit(1);
    }
}
