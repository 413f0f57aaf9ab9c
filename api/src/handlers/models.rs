//! Model handlers
//!
//! Endpoints for listing and activating rubric presets ("models").

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::domain::entities::PresetDescriptor;
use super::run_blocking;
use crate::error::AppError;
use crate::AppState;

/// Response for a successful activation
#[derive(Debug, Serialize)]
pub struct ActivateResponse {
    pub ok: bool,
    pub message: String,
}

/// GET /api/models
pub async fn list_models(
    State(state): State<AppState>,
) -> Result<Json<Vec<PresetDescriptor>>, AppError> {
    let presets = state.presets.clone();
    Ok(Json(run_blocking(move || Ok(presets.list()?)).await?))
}

/// POST /api/models/:id/activate
///
/// Copy the preset over the active criteria file.
pub async fn activate_model(
    State(state): State<AppState>,
    Path(model_id): Path<String>,
) -> Result<Json<ActivateResponse>, AppError> {
    let presets = state.presets.clone();
    let preset = run_blocking(move || Ok(presets.activate(&model_id)?)).await?;

    Ok(Json(ActivateResponse {
        ok: true,
        message: format!("Activated model: {}", preset.id),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialize_activate_response() {
        let response = ActivateResponse {
            ok: true,
            message: "Activated model: strict".to_string(),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["ok"], true);
        assert_eq!(json["message"], "Activated model: strict");
    }
}
