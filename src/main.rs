use cats_core::{CatStore, ServerConfig, REST_ADDR_ENV};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main entry point for the cats service
///
/// Loads `.env` if present, resolves configuration once, then serves the REST API over a
/// fresh, empty in-memory store. Every record is lost when the process exits.
///
/// # Environment Variables
/// - `CATS_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `RUST_LOG`: extra tracing filter directives
///
/// # Returns
/// * `Ok(())` - If the server starts and shuts down cleanly
/// * `Err(anyhow::Error)` - If configuration, binding or serving fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("cats_run=info".parse()?)
                .add_directive("cats_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = ServerConfig::from_env_value(std::env::var(REST_ADDR_ENV).ok())?;

    tracing::info!("++ Starting cats REST on {}", cfg.rest_addr());

    let store = CatStore::new();
    let rest_app = api_rest::router(store);

    let listener = tokio::net::TcpListener::bind(cfg.rest_addr()).await?;
    axum::serve(listener, rest_app).await?;

    Ok(())
}
