//! PaperLens Web Server
//!
//! Run with: cargo run -p paperlens-web

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use paperlens_common::Config;
use paperlens_extract::sources::OpenAlexClient;
use paperlens_scoring::model::RiskModel;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting PaperLens backend...");

    let config = Config::load()?;
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;

    let provider = Arc::new(OpenAlexClient::new(
        &config.openalex.mailto,
        Duration::from_secs(config.openalex.timeout_secs),
    )?);

    // Model deserialization is an external integration point; without a
    // linked backend the scorer runs in heuristic mode.
    let model: Option<Arc<dyn RiskModel>> = None;
    if config.model.enabled {
        warn!("model.enabled is set but no model backend is linked; running in heuristic mode");
    }
    info!(
        model_status = if model.is_some() { "available" } else { "heuristic mode" },
        "scoring tiers initialized"
    );

    let state = paperlens_web::state::AppState::new(config, provider, model);
    let app = paperlens_web::router::build_router(state);

    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
