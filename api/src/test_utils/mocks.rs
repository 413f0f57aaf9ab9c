//! Mock implementations of port traits
//!
//! In-memory implementations that can be configured for testing.

use async_trait::async_trait;
use serde_json::json;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{
    AssignmentRef, ConnectionStatus, CourseRef, GradePublishRequest, PublishOutcome, SourceMode,
    StudentSubmission,
};
use crate::domain::ports::GradeSource;
use crate::error::GradeSourceError;

// ============================================================================
// Mock Grade Source
// ============================================================================

/// Remote-mode grade source that never touches the network
#[derive(Default)]
pub struct MockGradeSource {
    pub published: Arc<RwLock<Vec<GradePublishRequest>>>,
    should_fail: bool,
    courses: Vec<CourseRef>,
}

impl MockGradeSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call fails with an upstream 500
    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn with_course(mut self, id: i64, name: &str) -> Self {
        self.courses.push(CourseRef {
            id,
            name: name.to_string(),
        });
        self
    }

    fn check(&self) -> Result<(), GradeSourceError> {
        if self.should_fail {
            return Err(GradeSourceError::Upstream {
                method: "GET",
                status: 500,
                body: "Mock failure".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl GradeSource for MockGradeSource {
    fn mode(&self) -> SourceMode {
        SourceMode::Remote
    }

    async fn connection_status(&self) -> Result<ConnectionStatus, GradeSourceError> {
        self.check()?;
        Ok(ConnectionStatus {
            mode: SourceMode::Remote,
            ok: true,
            message: "Connected to Canvas as Mock User.".to_string(),
        })
    }

    async fn list_courses(&self) -> Result<Vec<CourseRef>, GradeSourceError> {
        self.check()?;
        Ok(self.courses.clone())
    }

    async fn list_assignments(
        &self,
        course_id: i64,
    ) -> Result<Vec<AssignmentRef>, GradeSourceError> {
        self.check()?;
        Ok(self
            .courses
            .iter()
            .filter(|c| c.id == course_id)
            .map(|c| AssignmentRef {
                id: c.id * 10,
                name: format!("{} Final", c.name),
                points_possible: 100.0,
            })
            .collect())
    }

    async fn list_submissions(
        &self,
        _course_id: i64,
        _assignment_id: i64,
    ) -> Result<Vec<StudentSubmission>, GradeSourceError> {
        self.check()?;
        Ok(Vec::new())
    }

    async fn publish_grade(
        &self,
        request: &GradePublishRequest,
    ) -> Result<PublishOutcome, GradeSourceError> {
        self.check()?;
        self.published.write().unwrap().push(request.clone());
        Ok(PublishOutcome {
            ok: true,
            result: json!({"id": 1, "grade": request.grade.to_string()}),
        })
    }
}
