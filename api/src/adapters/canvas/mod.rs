//! Canvas adapter
//!
//! Grade source that talks to a live Canvas LMS instance.

pub mod client;

pub use client::CanvasSource;
