use axum::extract::State;
use axum::Json;
use tracing::error;

use super::{daemon_unavailable, run_isolated, MessageResponse, ModelNameRequest};
use crate::error::ApiError;
use crate::state::AppState;

pub async fn delete_model(
    State(state): State<AppState>,
    Json(request): Json<ModelNameRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let ollama = state.ollama.clone();
    let name = request.model_name.clone();
    let deleted = run_isolated(async move {
        if !ollama.check_status().await {
            return Err(daemon_unavailable());
        }
        Ok(ollama.delete_model(&name).await)
    })
    .await
    .map_err(|e| {
        error!("[ollama-proxy] Error deleting model {}: {}", request.model_name, e);
        ApiError::Internal("Failed to delete model".to_string())
    })??;

    if !deleted {
        return Err(ApiError::BadRequest(format!(
            "Failed to delete model: {}",
            request.model_name
        )));
    }

    Ok(Json(MessageResponse {
        message: format!("Successfully deleted model: {}", request.model_name),
    }))
}
