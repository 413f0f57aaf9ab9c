//! Canvas LMS grade source implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Deserializer};
use serde_json::Value;

use crate::config::Config;
use crate::domain::entities::{
    AssignmentRef, ConnectionStatus, CourseRef, GradePublishRequest, PublishOutcome, SourceMode,
    StudentSubmission,
};
use crate::domain::ports::GradeSource;
use crate::error::GradeSourceError;

/// Fixed page size for every list call
const PAGE_SIZE: &str = "50";

/// Points assumed when Canvas omits `points_possible`
const DEFAULT_POINTS_POSSIBLE: f64 = 100.0;

/// Grade source backed by a live Canvas instance
pub struct CanvasSource {
    http: Client,
    base_url: String,
    token: String,
    timeout: Duration,
}

impl CanvasSource {
    pub fn new(base_url: String, token: String, timeout: Duration) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
            timeout,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.canvas_base_url.clone(),
            config.canvas_token.clone(),
            config.canvas_timeout,
        )
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/api/v1{}", self.base_url, path)
    }

    /// Fails before any request is built if a setting is missing
    fn ensure_configured(&self) -> Result<(), GradeSourceError> {
        if self.base_url.is_empty() {
            return Err(GradeSourceError::Configuration(
                "CANVAS_BASE_URL is not set. Add it to your .env file.".to_string(),
            ));
        }
        if self.token.is_empty() {
            return Err(GradeSourceError::Configuration(
                "CANVAS_TOKEN is not set. Add it to your .env file.".to_string(),
            ));
        }
        Ok(())
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, GradeSourceError> {
        self.ensure_configured()?;
        tracing::debug!("Canvas GET {}", path);

        let resp = self
            .http
            .get(self.api_url(path))
            .bearer_auth(&self.token)
            .query(query)
            .timeout(self.timeout)
            .send()
            .await?;

        self.handle_response("GET", resp).await
    }

    async fn put_form<T: DeserializeOwned>(
        &self,
        path: &str,
        form: &[(&str, &str)],
    ) -> Result<T, GradeSourceError> {
        self.ensure_configured()?;
        tracing::debug!("Canvas PUT {}", path);

        let resp = self
            .http
            .put(self.api_url(path))
            .bearer_auth(&self.token)
            .form(form)
            .timeout(self.timeout)
            .send()
            .await?;

        self.handle_response("PUT", resp).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        method: &'static str,
        response: reqwest::Response,
    ) -> Result<T, GradeSourceError> {
        let status = response.status().as_u16();

        if status >= 400 {
            let body = response.text().await?;
            return Err(GradeSourceError::Upstream {
                method,
                status,
                body,
            });
        }

        response
            .json()
            .await
            .map_err(|e| GradeSourceError::Decode(e.to_string()))
    }
}

/// Response types from the Canvas API
#[derive(Deserialize)]
struct CanvasProfile {
    name: Option<String>,
}

#[derive(Deserialize)]
struct CanvasCourse {
    id: i64,
    name: Option<String>,
}

impl From<CanvasCourse> for CourseRef {
    fn from(c: CanvasCourse) -> Self {
        CourseRef {
            id: c.id,
            name: c.name.unwrap_or_else(|| format!("Course {}", c.id)),
        }
    }
}

#[derive(Deserialize)]
struct CanvasAssignment {
    id: i64,
    name: Option<String>,
    points_possible: Option<f64>,
}

impl From<CanvasAssignment> for AssignmentRef {
    fn from(a: CanvasAssignment) -> Self {
        AssignmentRef {
            id: a.id,
            name: a.name.unwrap_or_else(|| format!("Assignment {}", a.id)),
            points_possible: a.points_possible.unwrap_or(DEFAULT_POINTS_POSSIBLE),
        }
    }
}

#[derive(Deserialize)]
struct CanvasSubmission {
    #[serde(default)]
    user: Option<CanvasUser>,
    #[serde(default, deserialize_with = "deserialize_grade")]
    grade: Option<String>,
}

#[derive(Deserialize)]
struct CanvasUser {
    #[serde(default, deserialize_with = "deserialize_user_id")]
    id: Option<i64>,
    #[serde(default)]
    name: Option<String>,
}

impl CanvasSubmission {
    /// Project onto a student row; `None` when the user has no identity
    fn into_student(self) -> Option<StudentSubmission> {
        let user = self.user?;
        let id = user.id?;
        Some(StudentSubmission {
            id,
            name: user.name.unwrap_or_else(|| format!("Student {}", id)),
            current_grade: self.grade,
        })
    }
}

/// Canvas sends grades as strings, but tolerate bare numbers
fn deserialize_grade<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Only a positive integer counts as an identity; anything else is `None`
/// so a single odd record cannot fail the whole list
fn deserialize_user_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?
        .as_ref()
        .and_then(Value::as_i64)
        .filter(|id| *id > 0))
}

#[async_trait]
impl GradeSource for CanvasSource {
    fn mode(&self) -> SourceMode {
        SourceMode::Remote
    }

    async fn connection_status(&self) -> Result<ConnectionStatus, GradeSourceError> {
        if self.base_url.is_empty() || self.token.is_empty() {
            return Ok(ConnectionStatus {
                mode: SourceMode::Remote,
                ok: false,
                message:
                    "Canvas is not configured yet. Add CANVAS_BASE_URL and CANVAS_TOKEN in .env."
                        .to_string(),
            });
        }

        let profile: CanvasProfile = self.get("/users/self", &[]).await?;
        Ok(ConnectionStatus {
            mode: SourceMode::Remote,
            ok: true,
            message: format!(
                "Connected to Canvas as {}.",
                profile.name.as_deref().unwrap_or("Unknown User")
            ),
        })
    }

    async fn list_courses(&self) -> Result<Vec<CourseRef>, GradeSourceError> {
        let courses: Vec<CanvasCourse> = self
            .get(
                "/courses",
                &[("per_page", PAGE_SIZE), ("enrollment_type", "teacher")],
            )
            .await?;

        Ok(courses.into_iter().map(Into::into).collect())
    }

    async fn list_assignments(
        &self,
        course_id: i64,
    ) -> Result<Vec<AssignmentRef>, GradeSourceError> {
        let assignments: Vec<CanvasAssignment> = self
            .get(
                &format!("/courses/{}/assignments", course_id),
                &[("per_page", PAGE_SIZE)],
            )
            .await?;

        Ok(assignments.into_iter().map(Into::into).collect())
    }

    async fn list_submissions(
        &self,
        course_id: i64,
        assignment_id: i64,
    ) -> Result<Vec<StudentSubmission>, GradeSourceError> {
        let submissions: Vec<CanvasSubmission> = self
            .get(
                &format!(
                    "/courses/{}/assignments/{}/submissions",
                    course_id, assignment_id
                ),
                &[("per_page", PAGE_SIZE), ("include[]", "user")],
            )
            .await?;

        let total = submissions.len();
        let students: Vec<StudentSubmission> = submissions
            .into_iter()
            .filter_map(CanvasSubmission::into_student)
            .collect();

        if students.len() < total {
            tracing::debug!(
                "Dropped {} submissions without a user",
                total - students.len()
            );
        }

        Ok(students)
    }

    async fn publish_grade(
        &self,
        request: &GradePublishRequest,
    ) -> Result<PublishOutcome, GradeSourceError> {
        let grade = request.grade.to_string();
        let result: Value = self
            .put_form(
                &format!(
                    "/courses/{}/assignments/{}/submissions/{}",
                    request.course_id, request.assignment_id, request.student_id
                ),
                &[
                    ("submission[posted_grade]", grade.as_str()),
                    ("comment[text_comment]", request.comment_text()),
                ],
            )
            .await?;

        tracing::info!(
            course_id = request.course_id,
            assignment_id = request.assignment_id,
            student_id = request.student_id,
            "Grade published to Canvas"
        );

        Ok(PublishOutcome { ok: true, result })
    }
}
