use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Response,
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::portfolio::models::PortfolioRecord;
use crate::portfolio::validation::check_record;
use crate::site::handlers::generate;
use crate::site::ExportFormat;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: String,
}

async fn load(state: &AppState, id: &str) -> Result<PortfolioRecord, AppError> {
    state
        .store
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Portfolio {id} not found")))
}

/// POST /api/v1/portfolios
pub async fn handle_create_portfolio(
    State(state): State<AppState>,
    Json(mut record): Json<PortfolioRecord>,
) -> Result<(StatusCode, Json<PortfolioRecord>), AppError> {
    check_record(&record, state.config.max_image_bytes)?;
    // Creation always mints a fresh identity.
    record.id = None;
    record.created_at = None;
    let stored = state.store.put(record).await?;
    Ok((StatusCode::CREATED, Json(stored)))
}

/// GET /api/v1/portfolios?user_id=
pub async fn handle_list_portfolios(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<PortfolioRecord>>, AppError> {
    Ok(Json(state.store.list_for_user(&params.user_id).await?))
}

/// GET /api/v1/portfolios/:id
pub async fn handle_get_portfolio(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PortfolioRecord>, AppError> {
    Ok(Json(load(&state, &id).await?))
}

/// PUT /api/v1/portfolios/:id
/// Replaces the stored record. The path id wins over any id in the body.
pub async fn handle_update_portfolio(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(mut record): Json<PortfolioRecord>,
) -> Result<Json<PortfolioRecord>, AppError> {
    load(&state, &id).await?;
    check_record(&record, state.config.max_image_bytes)?;
    record.id = Some(id);
    Ok(Json(state.store.put(record).await?))
}

/// DELETE /api/v1/portfolios/:id
pub async fn handle_delete_portfolio(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    if state.store.delete(&id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Portfolio {id} not found")))
    }
}

/// GET /api/v1/portfolios/:id/preview
pub async fn handle_preview_portfolio(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let record = load(&state, &id).await?;
    generate(&state, record, None, ExportFormat::Html, false).await
}

/// GET /api/v1/portfolios/:id/export/html
pub async fn handle_export_portfolio_html(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let record = load(&state, &id).await?;
    generate(&state, record, None, ExportFormat::Html, true).await
}

/// GET /api/v1/portfolios/:id/export/zip
pub async fn handle_export_portfolio_zip(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let record = load(&state, &id).await?;
    generate(&state, record, None, ExportFormat::Zip, true).await
}
