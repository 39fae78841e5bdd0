use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use parking_chat_relay::{config::Config, routes, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("parking_chat_relay=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env().context("loading configuration")?;
    tracing::debug!(?config, "configuration loaded");

    let state = Arc::new(AppState::from_config(&config).context("building HTTP client")?);
    let app = routes::create_router().with_state(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {}", addr))?;

    tracing::info!("🚀 parking chat relay running at http://{}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            tracing::info!("shutting down");
        })
        .await?;

    Ok(())
}
