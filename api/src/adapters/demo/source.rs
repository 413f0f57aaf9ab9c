//! Demo grade source
//!
//! Serves a fixed in-memory dataset so the whole app can be exercised
//! without a Canvas instance.

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::json;

use crate::domain::entities::{
    AssignmentRef, ConnectionStatus, CourseRef, GradePublishRequest, PublishOutcome, SourceMode,
    StudentSubmission,
};
use crate::domain::ports::GradeSource;
use crate::error::GradeSourceError;

type SubmissionKey = (i64, i64);

/// Grade source backed by the built-in demo dataset
pub struct DemoSource {
    courses: Vec<CourseRef>,
    assignments: HashMap<i64, Vec<AssignmentRef>>,
    submissions: HashMap<SubmissionKey, Vec<StudentSubmission>>,
}

impl DemoSource {
    pub fn new() -> Self {
        let courses = vec![
            course(101, "Demo Course: Foundations"),
            course(102, "Demo Course: Project Studio"),
        ];

        let assignments = HashMap::from([
            (
                101,
                vec![
                    assignment(5001, "Essay Draft"),
                    assignment(5002, "Presentation"),
                ],
            ),
            (102, vec![assignment(6001, "Prototype Plan")]),
        ]);

        let submissions = HashMap::from([
            (
                (101, 5001),
                vec![student(9001, "Alex Smith"), student(9002, "Jordan Lee")],
            ),
            ((101, 5002), vec![student(9001, "Alex Smith")]),
            ((102, 6001), vec![student(9003, "Taylor Rivera")]),
        ]);

        Self {
            courses,
            assignments,
            submissions,
        }
    }
}

impl Default for DemoSource {
    fn default() -> Self {
        Self::new()
    }
}

fn course(id: i64, name: &str) -> CourseRef {
    CourseRef {
        id,
        name: name.to_string(),
    }
}

fn assignment(id: i64, name: &str) -> AssignmentRef {
    AssignmentRef {
        id,
        name: name.to_string(),
        points_possible: 100.0,
    }
}

fn student(id: i64, name: &str) -> StudentSubmission {
    StudentSubmission {
        id,
        name: name.to_string(),
        current_grade: None,
    }
}

#[async_trait]
impl GradeSource for DemoSource {
    fn mode(&self) -> SourceMode {
        SourceMode::Demo
    }

    async fn connection_status(&self) -> Result<ConnectionStatus, GradeSourceError> {
        Ok(ConnectionStatus {
            mode: SourceMode::Demo,
            ok: true,
            message: "Demo mode is active. Canvas is not required.".to_string(),
        })
    }

    async fn list_courses(&self) -> Result<Vec<CourseRef>, GradeSourceError> {
        Ok(self.courses.clone())
    }

    async fn list_assignments(
        &self,
        course_id: i64,
    ) -> Result<Vec<AssignmentRef>, GradeSourceError> {
        Ok(self.assignments.get(&course_id).cloned().unwrap_or_default())
    }

    async fn list_submissions(
        &self,
        course_id: i64,
        assignment_id: i64,
    ) -> Result<Vec<StudentSubmission>, GradeSourceError> {
        Ok(self
            .submissions
            .get(&(course_id, assignment_id))
            .cloned()
            .unwrap_or_default())
    }

    async fn publish_grade(
        &self,
        request: &GradePublishRequest,
    ) -> Result<PublishOutcome, GradeSourceError> {
        tracing::info!(
            course_id = request.course_id,
            assignment_id = request.assignment_id,
            student_id = request.student_id,
            "Demo grade published"
        );

        Ok(PublishOutcome {
            ok: true,
            result: json!({
                "demo": true,
                "published_grade": request.grade,
                "comment": request.comment_text(),
                "student_id": request.student_id,
            }),
        })
    }
}
