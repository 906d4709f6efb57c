//! VitalSense Predict Server
//!
//! Serves the trained vital-sign classifier over a JSON API.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   VITALSENSE PREDICT SERVER                 │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ┌───────────┐  ┌─────────────────┐  ┌───────────────────┐ │
//! │  │  API      │  │  Predictor      │  │  Risk score &     │ │
//! │  │  (Axum)   │─▶│  Arc, read-only │  │  recommendations  │ │
//! │  └───────────┘  └────────┬────────┘  └───────────────────┘ │
//! │                          ▲                                  │
//! │                  ┌───────┴───────┐                          │
//! │                  │  model.json   │  (vitalsense-train)      │
//! │                  └───────────────┘                          │
//! └─────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod models;
mod handlers;
mod error;
mod extract;
mod routes;


use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};
use vitalsense_core::Predictor;

pub use error::{AppError, AppResult};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub predictor: Arc<Predictor>,
    pub config: config::Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    // Initialize logging (core `log` records are bridged into tracing)
    let fmt_layer = if config.json_logs() {
        tracing_subscriber::fmt::layer().json().boxed()
    } else {
        tracing_subscriber::fmt::layer().boxed()
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "vitalsense_server=debug,vitalsense_core=info,tower_http=debug".into()))
        .with(fmt_layer)
        .init();

    tracing::info!("VitalSense Predict Server starting ({})...", config.environment);
    tracing::info!("Model: {}", config.model_path);

    // Model must be ready before the listener binds
    let predictor = Predictor::load(&config.model_path)
        .with_context(|| format!("Failed to load model artifact {}", config.model_path))?;

    predictor
        .check_labels(!config.is_production())
        .context("Recommendation table does not cover the classifier labels")?;

    let state = AppState {
        predictor: Arc::new(predictor),
        config: config.clone(),
    };

    let app = routes::create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("🚀 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
