mod config;
mod display_name;
mod error;
mod handlers;
mod models;
mod ollama;
mod routes;
mod state;

use tracing::{info, warn};

use crate::config::Config;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();
    info!("[ollama-proxy] Starting ollama-proxy server");
    info!("[ollama-proxy] Ollama base URL: {}", config.ollama_base_url);
    info!(
        "[ollama-proxy] Timeouts: {}s metadata, {}s pull",
        config.timeout_secs, config.pull_timeout_secs
    );

    let state = AppState::new(config.clone())?;
    if state.ollama.check_status().await {
        info!("[ollama-proxy] Ollama daemon is reachable");
    } else {
        warn!("[ollama-proxy] Ollama daemon is not reachable yet, serving anyway");
    }

    let app = routes::build_router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("[ollama-proxy] Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
