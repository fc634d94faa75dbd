use axum::extract::State;
use axum::Json;
use tokio::task::JoinError;
use tracing::error;

use super::run_isolated;
use crate::models::HealthReport;
use crate::state::AppState;

/// Always answers 200; problems are reported in the body.
pub async fn health(State(state): State<AppState>) -> Json<HealthReport> {
    let ollama = state.ollama.clone();
    let outcome = run_isolated(async move { ollama.check_status().await }).await;
    Json(report_from(outcome, state.ollama.base_url()))
}

fn report_from(outcome: Result<bool, JoinError>, base_url: &str) -> HealthReport {
    match outcome {
        Ok(accessible) => HealthReport::checked(accessible, base_url),
        Err(e) => {
            error!("[ollama-proxy] Ollama health check failed: {}", e);
            HealthReport::failed(e.to_string(), base_url)
        }
    }
}
