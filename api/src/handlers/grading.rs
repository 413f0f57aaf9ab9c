//! Grading handlers
//!
//! Endpoints backed by the configured grade source. Every handler goes
//! through `AppState::grade_source`, so they behave the same in demo and
//! Canvas mode.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::domain::entities::{
    AssignmentRef, ConnectionStatus, CourseRef, GradePublishRequest, GradeValue, PublishOutcome,
    StudentSubmission,
};
use crate::error::AppError;
use crate::AppState;

/// Request body for publishing a grade
///
/// Fields are optional so a missing one can be reported with the API's own
/// error message instead of the extractor's.
#[derive(Debug, Deserialize)]
pub struct PublishGradeBody {
    pub course_id: Option<i64>,
    pub assignment_id: Option<i64>,
    pub student_id: Option<i64>,
    pub grade: Option<GradeValue>,
    pub comment: Option<String>,
}

impl TryFrom<PublishGradeBody> for GradePublishRequest {
    type Error = AppError;

    fn try_from(body: PublishGradeBody) -> Result<Self, Self::Error> {
        match (body.course_id, body.assignment_id, body.student_id, body.grade) {
            (Some(course_id), Some(assignment_id), Some(student_id), Some(grade)) => {
                Ok(GradePublishRequest {
                    course_id,
                    assignment_id,
                    student_id,
                    grade,
                    comment: body.comment,
                })
            }
            _ => Err(missing_fields()),
        }
    }
}

fn missing_fields() -> AppError {
    AppError::BadRequest("Missing required fields.".to_string())
}

/// GET /api/connection
///
/// 200 when the source answered or is simply not set up yet; 400 when the
/// probe reached the backend and failed. Both carry a status body.
pub async fn connection(State(state): State<AppState>) -> (StatusCode, Json<ConnectionStatus>) {
    match state.grade_source.connection_status().await {
        Ok(status) => (StatusCode::OK, Json(status)),
        Err(e) => {
            tracing::warn!("Connection check failed: {}", e);
            (
                StatusCode::BAD_REQUEST,
                Json(ConnectionStatus {
                    mode: state.grade_source.mode(),
                    ok: false,
                    message: e.to_string(),
                }),
            )
        }
    }
}

/// GET /api/courses
pub async fn list_courses(
    State(state): State<AppState>,
) -> Result<Json<Vec<CourseRef>>, AppError> {
    Ok(Json(state.grade_source.list_courses().await?))
}

/// GET /api/courses/:course_id/assignments
pub async fn list_assignments(
    State(state): State<AppState>,
    Path(course_id): Path<i64>,
) -> Result<Json<Vec<AssignmentRef>>, AppError> {
    Ok(Json(state.grade_source.list_assignments(course_id).await?))
}

/// GET /api/courses/:course_id/assignments/:assignment_id/students
pub async fn list_students(
    State(state): State<AppState>,
    Path((course_id, assignment_id)): Path<(i64, i64)>,
) -> Result<Json<Vec<StudentSubmission>>, AppError> {
    Ok(Json(
        state
            .grade_source
            .list_submissions(course_id, assignment_id)
            .await?,
    ))
}

/// POST /api/publish-grade
pub async fn publish_grade(
    State(state): State<AppState>,
    payload: Result<Json<PublishGradeBody>, JsonRejection>,
) -> Result<Json<PublishOutcome>, AppError> {
    let Json(body) = payload.map_err(|e| {
        tracing::debug!("Rejected publish body: {}", e);
        missing_fields()
    })?;
    let request = GradePublishRequest::try_from(body)?;

    Ok(Json(state.grade_source.publish_grade(&request).await?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_publish_body_full() {
        let json = r#"{
            "course_id": 101,
            "assignment_id": 5001,
            "student_id": 9001,
            "grade": "88",
            "comment": "Well argued"
        }"#;
        let body: PublishGradeBody = serde_json::from_str(json).unwrap();

        let request = GradePublishRequest::try_from(body).unwrap();

        assert_eq!(request.course_id, 101);
        assert_eq!(request.grade, GradeValue::from("88"));
        assert_eq!(request.comment.as_deref(), Some("Well argued"));
    }

    #[test]
    fn parse_publish_body_numeric_grade_without_comment() {
        let json = r#"{"course_id": 1, "assignment_id": 2, "student_id": 3, "grade": 9.5}"#;
        let body: PublishGradeBody = serde_json::from_str(json).unwrap();

        let request = GradePublishRequest::try_from(body).unwrap();

        assert_eq!(request.grade.to_string(), "9.5");
        assert!(request.comment.is_none());
    }

    #[test]
    fn publish_body_missing_grade_is_rejected() {
        let json = r#"{"course_id": 1, "assignment_id": 2, "student_id": 3}"#;
        let body: PublishGradeBody = serde_json::from_str(json).unwrap();

        let err = GradePublishRequest::try_from(body).unwrap_err();

        assert_eq!(err.to_string(), "Missing required fields.");
    }
}
