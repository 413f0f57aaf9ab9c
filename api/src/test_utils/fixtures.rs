//! Test fixtures
//!
//! Rubric documents and on-disk layouts with sensible defaults.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use tempfile::TempDir;

use crate::config::Config;
use crate::domain::ports::GradeSource;
use crate::AppState;

/// Two domains, interleaved, plus one row that must be dropped
pub const WRITING_RUBRIC: &str = r#"{
  "criteria": [
    {"title": "Thesis", "domain": "Writing", "max_score": 10},
    {"title": "Sources", "domain": "Research", "description": "Cites peer-reviewed work"},
    {"title": "", "domain": "Writing"},
    {"title": "Grammar", "domain": "Writing", "weight": 0.5}
  ]
}"#;

/// Single-criterion preset
pub const STUDIO_RUBRIC: &str = r#"{
  "criteria": [
    {"id": "proto", "title": "Prototype Quality", "domain": "Craft", "max_score": 20}
  ]
}"#;

/// A temporary working directory with a preset dir and an active criteria path
pub struct Workspace {
    _root: TempDir,
    pub config: Config,
}

impl Workspace {
    /// Empty presets directory, no active rubric
    pub fn new() -> Self {
        let root = tempfile::tempdir().unwrap();
        let config = Config {
            criteria_path: root.path().join("config").join("criteria.json"),
            presets_dir: root.path().join("presets"),
            ..Config::default()
        };
        fs::create_dir_all(&config.presets_dir).unwrap();
        Self {
            _root: root,
            config,
        }
    }

    pub fn with_preset(self, id: &str, contents: &str) -> Self {
        fs::write(self.config.presets_dir.join(format!("{}.json", id)), contents).unwrap();
        self
    }

    pub fn with_active(self, contents: &str) -> Self {
        let path = self.active_path();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
        self
    }

    pub fn active_path(&self) -> PathBuf {
        self.config.criteria_path.clone()
    }

    pub fn state(&self, grade_source: Arc<dyn GradeSource>) -> AppState {
        AppState::new(&self.config, grade_source)
    }
}
