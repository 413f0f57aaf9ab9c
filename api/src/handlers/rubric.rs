//! Rubric handlers
//!
//! The rubric page and its JSON equivalent.

use axum::{extract::State, response::Html, Json};
use serde::Serialize;

use crate::domain::entities::{group_by_domain, Criterion, DomainGroup, SourceMode};
use super::run_blocking;
use crate::error::AppError;
use crate::page::render_rubric_page;
use crate::AppState;

/// Active rubric, flat and grouped by domain
#[derive(Debug, Serialize)]
pub struct CriteriaResponse {
    pub criteria: Vec<Criterion>,
    pub grouped: Vec<DomainGroup>,
}

async fn load_criteria(state: &AppState) -> Result<Vec<Criterion>, AppError> {
    let store = state.criteria_store.clone();
    run_blocking(move || Ok(store.load()?)).await
}

/// GET /
///
/// Render the active rubric grouped by domain.
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let criteria = load_criteria(&state).await?;
    let groups = group_by_domain(criteria);
    let demo_mode = state.grade_source.mode() == SourceMode::Demo;

    Ok(Html(render_rubric_page(&groups, demo_mode)))
}

/// GET /api/criteria
pub async fn get_criteria(
    State(state): State<AppState>,
) -> Result<Json<CriteriaResponse>, AppError> {
    let criteria = load_criteria(&state).await?;
    let grouped = group_by_domain(criteria.clone());

    Ok(Json(CriteriaResponse { criteria, grouped }))
}
