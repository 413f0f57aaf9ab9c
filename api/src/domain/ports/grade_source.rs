//! Grade source port trait
//!
//! Defines the single contract every grading backend implements. The HTTP
//! layer only ever talks to a `dyn GradeSource`, so the demo dataset and a
//! live Canvas instance are interchangeable.

use async_trait::async_trait;

use crate::domain::entities::{
    AssignmentRef, ConnectionStatus, CourseRef, GradePublishRequest, PublishOutcome, SourceMode,
    StudentSubmission,
};
use crate::error::GradeSourceError;

/// Port trait for grade source operations
#[async_trait]
pub trait GradeSource: Send + Sync {
    /// Which variant this is
    fn mode(&self) -> SourceMode;

    /// Probe the source.
    ///
    /// A source that is not set up yet reports `ok == false` in the status.
    /// `Err` means the probe itself reached the backend and failed.
    async fn connection_status(&self) -> Result<ConnectionStatus, GradeSourceError>;

    /// Courses the caller teaches
    async fn list_courses(&self) -> Result<Vec<CourseRef>, GradeSourceError>;

    /// Assignments in a course (empty for an unknown course)
    async fn list_assignments(&self, course_id: i64)
        -> Result<Vec<AssignmentRef>, GradeSourceError>;

    /// Students who have a submission record for the assignment
    async fn list_submissions(
        &self,
        course_id: i64,
        assignment_id: i64,
    ) -> Result<Vec<StudentSubmission>, GradeSourceError>;

    /// Post a grade (and optional comment) for one student
    async fn publish_grade(
        &self,
        request: &GradePublishRequest,
    ) -> Result<PublishOutcome, GradeSourceError>;
}
