//! Domain entities
//!
//! Pure domain models representing core business concepts.

pub mod criterion;
pub mod grading;
pub mod preset;

pub use criterion::{group_by_domain, Criterion, DomainGroup, DEFAULT_MAX_SCORE, DEFAULT_WEIGHT};
pub use grading::{
    AssignmentRef, ConnectionStatus, CourseRef, GradePublishRequest, GradeValue, PublishOutcome,
    SourceMode, StudentSubmission,
};
pub use preset::PresetDescriptor;
