//! Studypulse server - student performance prediction dashboard.
//!
//! Serves a single page: POST runs the regression model over the submitted
//! study metrics and upserts today's score, GET renders the current
//! prediction and the stored history chart.
//!
//! # Usage
//! ```sh
//! MONGO_URI=mongodb://localhost:27017 cargo run
//! ```
//!
//! # Environment Variables
//! - `MONGO_URI` - MongoDB connection string; unset runs without persistence
//! - `MODEL_PATH` / `MODEL_URL` - local model artifact and its download source
//! - `HOST` / `PORT` - bind address (default 127.0.0.1:5000)

use anyhow::{Context, Result};
use std::sync::Arc;
use studypulse::application::dashboard::DashboardService;
use studypulse::config::Config;
use studypulse::domain::ports::PerformancePredictor;
use studypulse::domain::repositories::PerformanceStore;
use studypulse::infrastructure::MongoPerformanceRepository;
use studypulse::infrastructure::model::{SmartcoreRegressor, ensure_artifact};
use studypulse::interfaces::http;
use tracing::{Level, info, warn};
use tracing_subscriber::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let stdout_layer = tracing_subscriber::fmt::layer().with_target(false);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stdout_layer)
        .init();

    info!("Studypulse {} starting...", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env()?;

    // The model is mandatory: fetch it if missing, fail hard if unloadable.
    ensure_artifact(&config.model_path, &config.model_url).await?;
    let predictor = SmartcoreRegressor::load(&config.model_path)
        .context("Failed to load performance model")?;
    info!("Model ready: {}", predictor.name());

    // Persistence is optional: a missing or unreachable database degrades
    // to a stateless instance instead of refusing to start.
    let store = match &config.mongo_uri {
        Some(uri) => {
            match MongoPerformanceRepository::connect(
                uri,
                &config.mongo_db,
                &config.mongo_collection,
                config.mongo_timeout,
            )
            .await
            {
                Ok(repo) => PerformanceStore::Connected(Arc::new(repo)),
                Err(e) => {
                    warn!("MongoDB unavailable, running without persistence: {e:#}");
                    PerformanceStore::Disabled
                }
            }
        }
        None => {
            warn!("MONGO_URI not set, running without persistence");
            PerformanceStore::Disabled
        }
    };
    info!(
        "Persistence: {}",
        if store.is_connected() {
            "connected"
        } else {
            "disabled"
        }
    );

    let dashboard = Arc::new(DashboardService::new(Arc::new(predictor), store));
    let router = http::router(dashboard);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    info!("Listening on http://{}", config.bind_addr);

    axum::serve(listener, router).await?;

    Ok(())
}
