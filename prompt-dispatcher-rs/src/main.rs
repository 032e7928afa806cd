// prompt-dispatcher-rs/src/main.rs
// Prompt Dispatcher - HTTP entry point for the SANDEVISTAN console
// Port 3000 - POST /api/gemini

use std::sync::Arc;

use config_rs::EnvConfigProvider;
use prompt_dispatcher::settings::DEFAULT_PORT;
use prompt_dispatcher::{create_router, AppState, Dispatcher, DispatcherSettings, GeminiClient, DISPATCH_PATH};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    config_rs::load_dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Arc::new(EnvConfigProvider::new());
    let settings = DispatcherSettings::from_provider(config.as_ref())?;

    let backend = GeminiClient::new(&settings.upstream)?;
    tracing::info!("Using Gemini endpoint: {}", backend.endpoint());
    match settings.upstream.timeout {
        Some(timeout) => tracing::info!("Outbound timeout: {:?}", timeout),
        None => tracing::info!("Outbound timeout: transport default"),
    }

    let dispatcher = Dispatcher::new(Arc::new(backend), config);
    if !dispatcher.is_configured() {
        tracing::warn!("GEMINI_API_KEY is not set; dispatch requests will fail until it is configured");
    }

    let app = create_router(Arc::new(AppState::new(dispatcher, settings.max_body_bytes)));

    let addr = config_rs::get_bind_address("DISPATCHER", DEFAULT_PORT);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Prompt Dispatcher listening on {} ({})", addr, DISPATCH_PATH);

    axum::serve(listener, app).await?;

    Ok(())
}
