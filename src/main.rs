mod config;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use crate::config::AppConfig;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mslp_api::{create_routes, AppState};
use mslp_data::ReferenceTable;
use mslp_ml::LinearArtifact;
use mslp_services::PredictorService;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mslp_rs=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("⚽ Starting Malaysia Super League Prediction System");

    // Load configuration
    let config = AppConfig::new()?;
    info!("✅ Configuration loaded successfully");
    info!("📄 Reference table: {}", config.data.reference_path);
    info!("🧠 Model artifact: {}", config.model.artifact_path);
    info!("🌐 Server will bind to: {}", config.server_addr());

    // Both collaborators are loaded once and shared read-only across requests
    let table = Arc::new(ReferenceTable::from_csv_path(&config.data.reference_path)?);
    let classifier = Arc::new(LinearArtifact::load(&config.model.artifact_path)?);
    let predictor = Arc::new(PredictorService::new(table, classifier));

    let state = AppState { predictor };
    let app = create_routes(Path::new(&config.server.assets_dir)).with_state(state);

    let listener = tokio::net::TcpListener::bind(config.server_addr()).await?;
    info!("✅ Listening on {}", listener.local_addr()?);
    info!("⌨️  Press Ctrl+C to stop");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            info!("👋 Shutting down gracefully");
        })
        .await?;

    Ok(())
}
