use axum::extract::State;
use axum::Json;
use tracing::error;

use super::run_isolated;
use crate::error::ApiError;
use crate::models::FormattedModel;
use crate::state::AppState;

pub async fn list_models(
    State(state): State<AppState>,
) -> Result<Json<Vec<FormattedModel>>, ApiError> {
    let ollama = state.ollama.clone();
    let models = run_isolated(async move {
        if !ollama.check_status().await {
            return Err(ApiError::Unavailable(
                "Ollama server is not accessible. Make sure Ollama is running on your local machine."
                    .to_string(),
            ));
        }
        Ok(ollama.list_formatted_models().await)
    })
    .await
    .map_err(|e| {
        error!("[ollama-proxy] Error getting available models: {}", e);
        ApiError::Internal("Failed to get available models".to_string())
    })??;

    Ok(Json(models))
}
