//! Standalone REST API server binary.
//!
//! ## Purpose
//! Runs the REST API server on its own, without the `.env` loading done by the workspace's
//! main `cats-run` binary.
//!
//! ## Intended use
//! Development and debugging of the REST layer (with OpenAPI/Swagger UI).

use cats_core::{CatStore, ServerConfig, REST_ADDR_ENV};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main entry point for the cats REST API server
///
/// # Environment Variables
/// - `CATS_REST_ADDR`: Server address (default: "0.0.0.0:3000")
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the server address is invalid or cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api_rest=info".parse()?)
                .add_directive("cats_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = ServerConfig::from_env_value(std::env::var(REST_ADDR_ENV).ok())?;

    tracing::info!("-- Starting cats REST API on {}", cfg.rest_addr());

    let app = api_rest::router(CatStore::new());

    let listener = tokio::net::TcpListener::bind(cfg.rest_addr()).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
