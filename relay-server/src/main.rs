use anyhow::Result;
use relay_core::Config;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let config = Config::from_env()?;
    if config.api_key.is_empty() {
        warn!("GEMINI_API_KEY not set - upstream calls will fail");
    }

    let addr = config.bind_addr.clone();
    let app = relay_server::app(config);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Relay listening at http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
