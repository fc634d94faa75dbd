pub mod delete;
pub mod health;
pub mod model_info;
pub mod models;
pub mod pull;
pub mod status;

use serde::{Deserialize, Serialize};
use std::future::Future;
use tokio::task::JoinError;

use crate::error::ApiError;

#[derive(Deserialize)]
pub struct ModelNameRequest {
    pub model_name: String,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

pub(crate) fn daemon_unavailable() -> ApiError {
    ApiError::Unavailable("Ollama server is not accessible".to_string())
}

/// Runs handler work on its own task so a panic inside it comes back as a
/// `JoinError` instead of tearing down the connection.
pub(crate) async fn run_isolated<F, T>(work: F) -> Result<T, JoinError>
where
    F: Future<Output = T> + Send + 'static,
    T: Send + 'static,
{
    tokio::spawn(work).await
}
