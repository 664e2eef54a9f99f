use std::sync::Arc;

use anyhow::Context;
use health_chatbot_backend::{
    config::{AppConfig, DEFAULT_LOG_FILTER},
    routes::create_router,
    services::gemini::GeminiClient,
    state::AppState,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let config = AppConfig::from_env();
    let key_loaded = !config.as_ref().is_err_and(|e| e.is_missing_api_key());
    tracing::info!("Loaded API Key: {}", if key_loaded { "YES" } else { "NO" });
    let config = config.context("failed to load configuration")?;
    tracing::debug!(?config, "Configuration loaded");

    let model = GeminiClient::new(&config).context("failed to build Gemini client")?;
    let state = Arc::new(AppState::new(Arc::new(model)));

    let app = create_router().with_state(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port))
        .await
        .with_context(|| format!("failed to bind port {}", config.port))?;

    tracing::info!("Server running on http://localhost:{}", config.port);
    axum::serve(listener, app).await?;
    Ok(())
}
