//! Medial - Binary Entry Point
//!
//! Loads the topic dataset and serves the dashboard API.

use std::sync::Arc;

use tracing::{info, warn};

use medial::api::{create_router, AppState};
use medial::config::AppConfig;
use medial::dataset::load_dataset;
use medial::types::MedialResult;

#[tokio::main]
async fn main() -> MedialResult<()> {
    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env();
    info!("{} v{}", medial::NAME, medial::VERSION);

    let dataset = Arc::new(load_dataset(&config.dataset_path)?);
    let state = AppState::new(
        dataset,
        config.sizes,
        &config.default_topic,
        config.page_size,
    )?;

    let app = create_router(Arc::new(state));
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("Listening on http://{}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            warn!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
