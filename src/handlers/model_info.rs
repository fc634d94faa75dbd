use axum::extract::{Path, State};
use axum::Json;
use serde_json::Value;
use tracing::error;

use super::{daemon_unavailable, run_isolated};
use crate::error::ApiError;
use crate::state::AppState;

/// Passes the daemon's `/api/show` body through untouched.
pub async fn get_model_info(
    State(state): State<AppState>,
    Path(model_name): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let ollama = state.ollama.clone();
    let name = model_name.clone();
    let info = run_isolated(async move {
        if !ollama.check_status().await {
            return Err(daemon_unavailable());
        }
        ollama
            .get_model_info(&name)
            .await
            .ok_or_else(|| ApiError::NotFound(format!("Model '{}' not found", name)))
    })
    .await
    .map_err(|e| {
        error!("[ollama-proxy] Error getting model info for {}: {}", model_name, e);
        ApiError::Internal("Failed to get model information".to_string())
    })??;

    Ok(Json(info))
}
