pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::portfolio::handlers as portfolios;
use crate::site::handlers as site;
use crate::state::AppState;
use crate::templates::handlers as templates;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Template catalog
        .route("/api/v1/templates", get(templates::handle_list_templates))
        .route("/api/v1/templates/:id", get(templates::handle_get_template))
        // Portfolio records
        .route(
            "/api/v1/portfolios",
            get(portfolios::handle_list_portfolios).post(portfolios::handle_create_portfolio),
        )
        .route(
            "/api/v1/portfolios/:id",
            get(portfolios::handle_get_portfolio)
                .put(portfolios::handle_update_portfolio)
                .delete(portfolios::handle_delete_portfolio),
        )
        .route(
            "/api/v1/portfolios/:id/preview",
            get(portfolios::handle_preview_portfolio),
        )
        .route(
            "/api/v1/portfolios/:id/export/html",
            get(portfolios::handle_export_portfolio_html),
        )
        .route(
            "/api/v1/portfolios/:id/export/zip",
            get(portfolios::handle_export_portfolio_zip),
        )
        // Site generation from an unsaved record
        .route("/api/v1/site/preview", post(site::handle_preview))
        .route("/api/v1/site/html", post(site::handle_export_html))
        .route("/api/v1/site/zip", post(site::handle_export_zip))
        .with_state(state)
}
