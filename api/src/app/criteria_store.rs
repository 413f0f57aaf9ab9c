//! Criteria store
//!
//! Loads the active rubric document and normalizes it into `Criterion`
//! records. Rows without a title or domain are dropped; malformed numbers
//! fail the whole load.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use serde_json::Value;

use crate::domain::entities::{Criterion, DEFAULT_MAX_SCORE, DEFAULT_WEIGHT};
use crate::error::CriteriaError;

/// Reads the active rubric document from disk on every call
#[derive(Debug, Clone)]
pub struct CriteriaStore {
    path: PathBuf,
}

impl CriteriaStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load and normalize the rubric.
    ///
    /// A missing file means no rubric has been configured yet and yields an
    /// empty list.
    pub fn load(&self) -> Result<Vec<Criterion>, CriteriaError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("No criteria file at {}", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        parse_criteria(&text)
    }
}

/// Normalize a rubric document of the shape `{"criteria": [...]}`.
pub fn parse_criteria(text: &str) -> Result<Vec<Criterion>, CriteriaError> {
    let document: Value = serde_json::from_str(text)?;

    let entries = match document.get("criteria") {
        Some(Value::Array(entries)) => entries,
        _ => return Ok(Vec::new()),
    };

    let mut criteria = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        if let Some(criterion) = normalize_entry(index, entry)? {
            criteria.push(criterion);
        }
    }

    Ok(criteria)
}

fn normalize_entry(index: usize, entry: &Value) -> Result<Option<Criterion>, CriteriaError> {
    if !entry.is_object() {
        tracing::debug!("Skipping criterion #{}: not an object", index);
        return Ok(None);
    }

    let max_score = coerce_number(entry.get("max_score"), DEFAULT_MAX_SCORE)
        .map_err(|message| validation(index, "max_score", message))?;
    // Well-formed but non-positive scores are rejected too
    if !(max_score.is_finite() && max_score > 0.0) {
        return Err(validation(
            index,
            "max_score",
            format!("{} is not a positive number", max_score),
        ));
    }

    let title = trimmed_str(entry.get("title"));
    let domain = trimmed_str(entry.get("domain"));
    if title.is_empty() || domain.is_empty() {
        tracing::debug!("Skipping criterion #{}: missing title or domain", index);
        return Ok(None);
    }

    let weight = coerce_number(entry.get("weight"), DEFAULT_WEIGHT)
        .map_err(|message| validation(index, "weight", message))?;
    if !weight.is_finite() {
        return Err(validation(index, "weight", "must be finite".to_string()));
    }

    // Blank, null or non-scalar ids cannot identify a row, so they get the
    // derived id as well
    let id = match entry.get("id") {
        Some(Value::String(s)) if !s.trim().is_empty() => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => Criterion::default_id(title),
    };

    let description = entry
        .get("description")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    Ok(Some(Criterion {
        id,
        title: title.to_string(),
        domain: domain.to_string(),
        description,
        max_score,
        weight,
    }))
}

fn validation(index: usize, field: &'static str, message: String) -> CriteriaError {
    CriteriaError::Validation {
        index,
        field,
        message,
    }
}

/// Non-string values count as empty
fn trimmed_str(value: Option<&Value>) -> &str {
    value.and_then(Value::as_str).map(str::trim).unwrap_or("")
}

/// Accepts numbers, numeric strings and booleans; absent means `default`
fn coerce_number(value: Option<&Value>, default: f64) -> Result<f64, String> {
    match value {
        None => Ok(default),
        Some(Value::Number(n)) => n
            .as_f64()
            .ok_or_else(|| format!("{} is out of range", n)),
        Some(Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| format!("'{}' is not a number", s)),
        Some(Value::Bool(b)) => Ok(if *b { 1.0 } else { 0.0 }),
        Some(other) => Err(format!("{} is not a number", other)),
    }
}
