//! Rubric Grader
//!
//! Serves the active grading rubric, lets an instructor switch between rubric
//! presets, and publishes grades to Canvas or to a built-in demo dataset.
//! Uses hexagonal (ports & adapters) architecture so both grade sources share
//! one interface.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod handlers;
mod page;

#[cfg(test)]
mod test_utils;


use app::{CriteriaStore, PresetCatalog};
use config::Config;
use domain::ports::GradeSource;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub grade_source: Arc<dyn GradeSource>,
    pub criteria_store: Arc<CriteriaStore>,
    pub presets: Arc<PresetCatalog>,
}

impl AppState {
    pub fn new(config: &Config, grade_source: Arc<dyn GradeSource>) -> Self {
        Self {
            grade_source,
            criteria_store: Arc::new(CriteriaStore::new(config.criteria_path.clone())),
            presets: Arc::new(PresetCatalog::new(
                config.presets_dir.clone(),
                config.criteria_path.clone(),
            )),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        // Rubric
        .route("/", get(handlers::index))
        .route("/api/criteria", get(handlers::get_criteria))
        // Presets
        .route("/api/models", get(handlers::list_models))
        .route("/api/models/:id/activate", post(handlers::activate_model))
        // Grading
        .route("/api/connection", get(handlers::connection))
        .route("/api/courses", get(handlers::list_courses))
        .route(
            "/api/courses/:course_id/assignments",
            get(handlers::list_assignments),
        )
        .route(
            "/api/courses/:course_id/assignments/:assignment_id/students",
            get(handlers::list_students),
        )
        .route("/api/publish-grade", post(handlers::publish_grade))
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,rubric_grader=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Rubric Grader...");

    // Load configuration
    let config = Config::from_env();

    // The grade source is fixed for the lifetime of the process
    let grade_source = adapters::build_grade_source(&config);
    tracing::info!("Grade source: {}", grade_source.mode());

    let state = AppState::new(&config, grade_source);
    let app = build_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app)
        .await
        .context("Server error")?;

    Ok(())
}
