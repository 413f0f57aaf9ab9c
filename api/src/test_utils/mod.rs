//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! The grade source mock is hand-written rather than generated: it records
//! what it was asked to publish and can be switched into a failing mode.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
