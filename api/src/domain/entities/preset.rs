//! Rubric preset descriptor

use serde::Serialize;

/// A selectable rubric document found in the preset directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresetDescriptor {
    /// File stem, also used as the activation key
    pub id: String,
    pub name: String,
    pub path: String,
}
