//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod grading;
pub mod models;
pub mod rubric;

pub use grading::{connection, list_assignments, list_courses, list_students, publish_grade};
pub use models::{activate_model, list_models};
pub use rubric::{get_criteria, index};

use crate::error::AppError;

/// Run filesystem work on tokio's blocking pool
pub(crate) async fn run_blocking<T, F>(work: F) -> Result<T, AppError>
where
    F: FnOnce() -> Result<T, AppError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| AppError::Internal(format!("Blocking task failed: {}", e)))?
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PresetError;

    #[tokio::test]
    async fn run_blocking_returns_the_work_result() {
        let value = run_blocking(|| Ok(21 * 2)).await.unwrap();
        assert_eq!(value, 42);
    }

    #[tokio::test]
    async fn run_blocking_passes_errors_through() {
        let err = run_blocking::<(), _>(|| Err(PresetError::NotFound("x".to_string()).into()))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Preset(PresetError::NotFound(_))));
    }

    #[tokio::test]
    async fn run_blocking_maps_panics_to_internal() {
        let err = run_blocking::<(), _>(|| panic!("boom")).await.unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
    }
}
