//! Grading projections
//!
//! Thin views of courses, assignments and submissions returned by every
//! grade source, plus the grade publish request and its outcome.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Which grade source variant is serving requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceMode {
    /// Built-in in-memory dataset
    Demo,
    /// Live Canvas instance
    Remote,
}

impl std::fmt::Display for SourceMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceMode::Demo => write!(f, "demo"),
            SourceMode::Remote => write!(f, "remote"),
        }
    }
}

/// Result of probing a grade source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionStatus {
    pub mode: SourceMode,
    pub ok: bool,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRef {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentRef {
    pub id: i64,
    pub name: String,
    pub points_possible: f64,
}

/// A student with their current grade on one assignment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentSubmission {
    pub id: i64,
    pub name: String,
    pub current_grade: Option<String>,
}

/// A grade as entered by the instructor: free text ("A-", "88%") or a number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GradeValue {
    Number(serde_json::Number),
    Text(String),
}

impl std::fmt::Display for GradeValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GradeValue::Number(n) => write!(f, "{}", n),
            GradeValue::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for GradeValue {
    fn from(s: &str) -> Self {
        GradeValue::Text(s.to_string())
    }
}

/// Grade to post for one student on one assignment
#[derive(Debug, Clone, PartialEq)]
pub struct GradePublishRequest {
    pub course_id: i64,
    pub assignment_id: i64,
    pub student_id: i64,
    pub grade: GradeValue,
    pub comment: Option<String>,
}

impl GradePublishRequest {
    /// Comment text to send, empty when none was given
    pub fn comment_text(&self) -> &str {
        self.comment.as_deref().unwrap_or("")
    }
}

/// Outcome of publishing a grade
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PublishOutcome {
    pub ok: bool,
    /// Upstream response body, or the demo echo
    pub result: Value,
}
