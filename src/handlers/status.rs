use axum::extract::State;
use axum::Json;
use tracing::error;

use super::run_isolated;
use crate::error::ApiError;
use crate::models::ServerStatus;
use crate::state::AppState;

pub async fn get_status(State(state): State<AppState>) -> Result<Json<ServerStatus>, ApiError> {
    let ollama = state.ollama.clone();
    let accessible = run_isolated(async move { ollama.check_status().await })
        .await
        .map_err(|e| {
            error!("[ollama-proxy] Error checking Ollama server status: {}", e);
            ApiError::Internal("Failed to check server status".to_string())
        })?;

    Ok(Json(ServerStatus::new(accessible, state.ollama.base_url())))
}
