//! Demo adapter
//!
//! Grade source backed by a hardcoded dataset.

pub mod source;

pub use source::DemoSource;
