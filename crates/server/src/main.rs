mod config;
mod errors;
mod routes;
mod state;

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::http::StatusCode;
use skillgap_core::{Analyzer, CatalogLoader, FetchConfig};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

/// Time allowed on top of the JD fetch timeout for parsing and scoring.
const REQUEST_GRACE_SECS: u64 = 30;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.rust_log)))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Skillgap server v{}", env!("CARGO_PKG_VERSION"));

    let loader = match &config.resources_path {
        Some(path) => CatalogLoader::builder().resource_path(path).build(),
        None => CatalogLoader::default(),
    };
    let catalog = loader.load().context("Failed to load skill resources")?;
    info!(
        "Skill catalog loaded ({} skills, {} with curated resources)",
        catalog.vocabulary.len(),
        catalog.resources.len()
    );

    let analyzer = Analyzer::builder(catalog)
        .fetch_config(FetchConfig { timeout: config.fetch_timeout, ..Default::default() })
        .include_debug(config.include_debug)
        .build();

    let request_timeout = Duration::from_secs(config.fetch_timeout + REQUEST_GRACE_SECS);
    let state = AppState::new(analyzer, config.clone());

    let app = build_router(state)
        .layer(TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, request_timeout))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
