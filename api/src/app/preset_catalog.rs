//! Preset catalog
//!
//! Lists the rubric presets shipped in the preset directory and activates
//! one by copying it over the active criteria file.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::domain::entities::PresetDescriptor;
use crate::error::PresetError;

/// Extension of preset documents
const PRESET_EXTENSION: &str = "json";

#[derive(Debug, Clone)]
pub struct PresetCatalog {
    dir: PathBuf,
    active_path: PathBuf,
}

impl PresetCatalog {
    pub fn new(dir: impl Into<PathBuf>, active_path: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            active_path: active_path.into(),
        }
    }

    /// Presets sorted by file name. A missing directory has no presets.
    pub fn list(&self) -> Result<Vec<PresetDescriptor>, PresetError> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut paths: Vec<PathBuf> = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.is_file() && has_preset_extension(&path) {
                paths.push(path);
            }
        }
        paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

        Ok(paths.iter().filter_map(|p| descriptor(p)).collect())
    }

    /// Replace the active criteria file with the preset named `id`.
    ///
    /// The new document is written to a temporary file next to the active
    /// one and renamed into place, so readers never see a partial file.
    pub fn activate(&self, id: &str) -> Result<PresetDescriptor, PresetError> {
        let source = self
            .resolve(id)
            .ok_or_else(|| PresetError::NotFound(id.to_string()))?;

        let bytes = fs::read(&source)?;

        let parent = match self.active_path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&parent)?;

        let mut staged = NamedTempFile::new_in(&parent)?;
        staged.write_all(&bytes)?;
        staged.as_file().sync_all()?;
        staged
            .persist(&self.active_path)
            .map_err(|e| PresetError::Io(e.error))?;

        tracing::info!(
            "Activated preset {} -> {}",
            id,
            self.active_path.display()
        );

        descriptor(&source).ok_or_else(|| PresetError::NotFound(id.to_string()))
    }

    /// Path of an existing preset document, if `id` names one
    fn resolve(&self, id: &str) -> Option<PathBuf> {
        if !is_valid_id(id) {
            return None;
        }
        let path = self.dir.join(format!("{}.{}", id, PRESET_EXTENSION));
        path.is_file().then_some(path)
    }
}

/// Ids are bare file stems; anything that could escape the directory is rejected
fn is_valid_id(id: &str) -> bool {
    !id.is_empty() && !id.contains(|c: char| matches!(c, '/' | '\\' | '\0')) && !id.contains("..")
}

/// Case-sensitive, so every listed preset resolves through `resolve`
fn has_preset_extension(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == PRESET_EXTENSION)
}

fn descriptor(path: &Path) -> Option<PresetDescriptor> {
    let stem = path.file_stem()?.to_string_lossy().to_string();
    Some(PresetDescriptor {
        id: stem.clone(),
        name: stem,
        path: path.display().to_string(),
    })
}
