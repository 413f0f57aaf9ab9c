//! Page module
//!
//! Server-rendered HTML for the rubric view.

pub mod renderer;

pub use renderer::render_rubric_page;
