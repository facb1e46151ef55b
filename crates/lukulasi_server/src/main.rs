//! Headless API server entrypoint.

use lukulasi_core::config::env_flag_enabled;
use lukulasi_server::{resolve_bind_address, serve_router, AppState, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to install shutdown handler: {}", err);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lukulasi=info,tower_http=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    let allow_public_access = env_flag_enabled("ALLOW_PUBLIC_ACCESS");

    let addr = resolve_bind_address(&config, allow_public_access);
    let state = AppState::new(config);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("lukulasi server listening on {}", listener.local_addr()?);

    serve_router(listener, state, allow_public_access, shutdown_signal()).await?;
    Ok(())
}
