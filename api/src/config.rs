use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Default location of the active rubric document
pub const DEFAULT_CRITERIA_PATH: &str = "config/criteria.json";

/// Default directory holding the selectable rubric presets
pub const DEFAULT_PRESETS_DIR: &str = "Criteria Grouping Models";

/// Default per-request deadline for Canvas calls
pub const DEFAULT_CANVAS_TIMEOUT_SECS: u64 = 20;

#[derive(Debug, Clone)]
pub struct Config {
    /// Canvas instance root, without a trailing slash
    pub canvas_base_url: String,
    /// Bearer token forwarded on every Canvas request
    pub canvas_token: String,
    /// Serve the built-in demo dataset instead of talking to Canvas
    pub demo_mode: bool,
    pub port: u16,
    /// Active rubric document read on every page load
    pub criteria_path: PathBuf,
    pub presets_dir: PathBuf,
    pub canvas_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            canvas_base_url: env::var("CANVAS_BASE_URL")
                .unwrap_or_default()
                .trim_end_matches('/')
                .to_string(),
            canvas_token: env::var("CANVAS_TOKEN").unwrap_or_default(),
            demo_mode: env::var("DEMO_MODE")
                .map(|v| parse_flag(&v))
                .unwrap_or(false),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            criteria_path: env::var("CRITERIA_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_CRITERIA_PATH)),
            presets_dir: env::var("PRESETS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_PRESETS_DIR)),
            canvas_timeout: Duration::from_secs(
                env::var("CANVAS_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(DEFAULT_CANVAS_TIMEOUT_SECS),
            ),
        }
    }

    /// Check if both Canvas settings are present
    pub fn canvas_configured(&self) -> bool {
        !self.canvas_base_url.is_empty() && !self.canvas_token.is_empty()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            canvas_base_url: String::new(),
            canvas_token: String::new(),
            demo_mode: false,
            port: 5000,
            criteria_path: PathBuf::from(DEFAULT_CRITERIA_PATH),
            presets_dir: PathBuf::from(DEFAULT_PRESETS_DIR),
            canvas_timeout: Duration::from_secs(DEFAULT_CANVAS_TIMEOUT_SECS),
        }
    }
}

/// Only a case-insensitive "true" turns a flag on
fn parse_flag(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("true")
}
