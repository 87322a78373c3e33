use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::portfolio::models::PortfolioRecord;
use crate::portfolio::validation::check_record;
use crate::site::download::download_response;
use crate::site::{build_archive, portfolio_filename, render_html, ExportFormat};
use crate::state::AppState;
use crate::templates::models::Template;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub portfolio: PortfolioRecord,
    /// Overrides `portfolio.settings.template` when present.
    #[serde(default)]
    pub template_id: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Shared generation path (also used by the stored-portfolio routes)
// ────────────────────────────────────────────────────────────────────────────

/// Explicit id, then the record's saved choice, then the catalog default.
pub fn select_template<'a>(
    state: &'a AppState,
    record: &PortfolioRecord,
    template_id: Option<&str>,
) -> &'a Template {
    let id = template_id.unwrap_or(&record.settings.template);
    state.catalog.resolve(id)
}

/// Renders `record` in `format`, either inline (preview) or as a download.
pub async fn generate(
    state: &AppState,
    record: PortfolioRecord,
    template_id: Option<&str>,
    format: ExportFormat,
    as_attachment: bool,
) -> Result<Response, AppError> {
    check_record(&record, state.config.max_image_bytes)?;

    let template = select_template(state, &record, template_id).clone();
    let today = state.clock.today();
    let filename = portfolio_filename(&record.personal_info, format);

    let body = match format {
        ExportFormat::Html => render_html(&record, &template, today)?.into_bytes(),
        ExportFormat::Zip => {
            tokio::task::spawn_blocking(move || build_archive(&record, &template, today))
                .await
                .map_err(|e| anyhow::anyhow!("Archive task failed: {e}"))??
        }
    };

    info!(
        filename = %filename,
        bytes = body.len(),
        attachment = as_attachment,
        "Generated portfolio site"
    );

    if as_attachment {
        Ok(download_response(format, &filename, body))
    } else {
        Ok(([(header::CONTENT_TYPE, format.content_type())], body).into_response())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/site/preview
/// Returns the rendered page inline for the editor's preview pane.
pub async fn handle_preview(
    State(state): State<AppState>,
    Json(req): Json<GenerateRequest>,
) -> Result<Response, AppError> {
    generate(
        &state,
        req.portfolio,
        req.template_id.as_deref(),
        ExportFormat::Html,
        false,
    )
    .await
}

/// POST /api/v1/site/html
pub async fn handle_export_html(
    State(state): State<AppState>,
    Json(req): Json<GenerateRequest>,
) -> Result<Response, AppError> {
    generate(
        &state,
        req.portfolio,
        req.template_id.as_deref(),
        ExportFormat::Html,
        true,
    )
    .await
}

/// POST /api/v1/site/zip
pub async fn handle_export_zip(
    State(state): State<AppState>,
    Json(req): Json<GenerateRequest>,
) -> Result<Response, AppError> {
    generate(
        &state,
        req.portfolio,
        req.template_id.as_deref(),
        ExportFormat::Zip,
        true,
    )
    .await
}
