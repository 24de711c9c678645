use std::sync::Arc;

use tokio::net::TcpListener;

use fx_sentiment::app;
use fx_sentiment::config::ServerConfig;
use fx_sentiment::external::gemini::GeminiProvider;
use fx_sentiment::logging::{init_logging, LoggingConfig};
use fx_sentiment::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // Initialize logging FIRST
    init_logging(LoggingConfig::from_env())?;

    let config = ServerConfig::from_env().map_err(|e| {
        tracing::error!("Invalid server configuration: {}", e);
        e
    })?;

    tracing::info!("🤖 Using model provider: Gemini ({})", config.gemini.model);
    let provider = GeminiProvider::new(config.gemini.clone())?;

    let state = AppState {
        model_provider: Arc::new(provider),
    };
    let app = app::create_app(state);

    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("🚀 FX sentiment proxy running at http://{}/", config.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
