//! Unified error types for the rubric grader
//!
//! This module defines error types for each layer:
//! - `GradeSourceError`: failures of a grade source (demo or Canvas)
//! - `CriteriaError`: fatal problems loading the active rubric document
//! - `PresetError`: preset lookup and activation failures
//! - `AppError`: Application layer errors (wraps the above for HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Grade source errors, shared by every source variant
#[derive(Debug, Error)]
pub enum GradeSourceError {
    /// Missing base URL or token; the request was never attempted
    #[error("{0}")]
    Configuration(String),

    #[error("Canvas {method} failed ({status}): {body}")]
    Upstream {
        method: &'static str,
        status: u16,
        body: String,
    },

    #[error("Canvas request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Could not decode Canvas response: {0}")]
    Decode(String),
}

impl GradeSourceError {
    /// Upstream status code, if the failure came from a response
    pub fn status(&self) -> Option<u16> {
        match self {
            GradeSourceError::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Rubric loading errors
#[derive(Debug, Error)]
pub enum CriteriaError {
    #[error("Could not read criteria file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Criteria file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Criterion #{index}: invalid {field}: {message}")]
    Validation {
        index: usize,
        field: &'static str,
        message: String,
    },
}

/// Preset catalog errors
#[derive(Debug, Error)]
pub enum PresetError {
    #[error("Model '{0}' not found.")]
    NotFound(String),

    #[error("Preset I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    GradeSource(#[from] GradeSourceError),

    #[error("{0}")]
    Criteria(#[from] CriteriaError),

    #[error("{0}")]
    Preset(#[from] PresetError),

    #[error("{0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match &self {
            AppError::GradeSource(e) => {
                tracing::warn!(upstream_status = ?e.status(), "Grade source error: {}", e);
                (StatusCode::BAD_REQUEST, e.to_string())
            }
            AppError::Criteria(e) => {
                tracing::error!("Criteria error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            AppError::Preset(PresetError::NotFound(_)) => {
                (StatusCode::NOT_FOUND, self.to_string())
            }
            AppError::Preset(e) => {
                tracing::error!("Preset error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { error })).into_response()
    }
}
