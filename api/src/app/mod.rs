//! Application layer
//!
//! Contains use cases around the rubric files: loading the active rubric and
//! switching between presets.

pub mod criteria_store;
pub mod preset_catalog;

pub use criteria_store::CriteriaStore;
pub use preset_catalog::PresetCatalog;
