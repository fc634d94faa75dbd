use axum::extract::State;
use axum::Json;
use tracing::error;

use super::{daemon_unavailable, run_isolated, MessageResponse, ModelNameRequest};
use crate::error::ApiError;
use crate::state::AppState;

pub async fn pull_model(
    State(state): State<AppState>,
    Json(request): Json<ModelNameRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let ollama = state.ollama.clone();
    let name = request.model_name.clone();
    let pulled = run_isolated(async move {
        if !ollama.check_status().await {
            return Err(daemon_unavailable());
        }
        Ok(ollama.pull_model(&name).await)
    })
    .await
    .map_err(|e| {
        error!("[ollama-proxy] Error pulling model {}: {}", request.model_name, e);
        ApiError::Internal("Failed to pull model".to_string())
    })??;

    if !pulled {
        return Err(ApiError::BadRequest(format!(
            "Failed to pull model: {}",
            request.model_name
        )));
    }

    Ok(Json(MessageResponse {
        message: format!("Successfully pulled model: {}", request.model_name),
    }))
}
