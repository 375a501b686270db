use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{AppState, router};
use nic_core::constants::LEGACY_CENTURY_ENV;
use nic_core::{Decoder, decoder_config_from_env_value};

/// Main entry point for the NIC decoder service
///
/// Resolves configuration once, then serves the REST API (with Swagger UI at
/// `/swagger-ui`).
///
/// # Environment Variables
/// - `NIC_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `NIC_LEGACY_CENTURY`: century added to two-digit legacy years (default: 1900)
/// - `RUST_LOG`: log filter (default directive: `nic_run=info`)
///
/// A `.env` file in the working directory is loaded first if present.
///
/// # Errors
/// Returns an error if:
/// - the logging configuration cannot be initialised,
/// - the configuration is invalid,
/// - the server address cannot be parsed or bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("nic_run=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr: SocketAddr = std::env::var("NIC_REST_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:3000".into())
        .parse()?;

    let config = decoder_config_from_env_value(std::env::var(LEGACY_CENTURY_ENV).ok())?;
    tracing::info!(
        legacy_century = config.legacy_century(),
        "++ Decoder configured"
    );

    let app = router(AppState::new(Decoder::new(config)));

    tracing::info!("++ Starting NIC REST on {}", rest_addr);
    let listener = tokio::net::TcpListener::bind(rest_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
