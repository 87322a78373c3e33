mod config;
mod errors;
mod portfolio;
mod routes;
mod site;
mod state;
mod templates;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::portfolio::InMemoryPortfolioStore;
use crate::routes::build_router;
use crate::site::SystemClock;
use crate::state::AppState;
use crate::templates::TemplateCatalog;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first; malformed values abort startup
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting QuickPortfolio API v{}", env!("CARGO_PKG_VERSION"));

    let catalog = TemplateCatalog::builtin(&config.default_template_id)?;
    info!(
        "Template catalog loaded: {} templates, default {}",
        catalog.all().len(),
        catalog.default_template().id
    );

    let state = AppState {
        config: config.clone(),
        store: Arc::new(InMemoryPortfolioStore::new()),
        catalog: Arc::new(catalog),
        clock: Arc::new(SystemClock),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins to the editor's host

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
