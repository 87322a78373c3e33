use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::state::AppState;
use crate::templates::catalog::{ALL_CATEGORIES, CATEGORIES};
use crate::templates::models::Template;

#[derive(Debug, Deserialize)]
pub struct CategoryQuery {
    pub category: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TemplateListResponse {
    pub categories: Vec<String>,
    pub templates: Vec<Template>,
}

/// GET /api/v1/templates
pub async fn handle_list_templates(
    State(state): State<AppState>,
    Query(params): Query<CategoryQuery>,
) -> Result<Json<TemplateListResponse>, AppError> {
    let category = params.category.as_deref().unwrap_or(ALL_CATEGORIES);
    if !CATEGORIES.contains(&category) {
        return Err(AppError::Validation(format!(
            "Unknown category '{category}'. Expected one of: {}",
            CATEGORIES.join(", ")
        )));
    }

    let templates = state
        .catalog
        .by_category(category)
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(TemplateListResponse {
        categories: CATEGORIES.iter().map(|c| c.to_string()).collect(),
        templates,
    }))
}

/// GET /api/v1/templates/:id
pub async fn handle_get_template(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Template>, AppError> {
    state
        .catalog
        .find(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Template {id} not found")))
}
