use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Failure of a single call to the Ollama daemon.
#[derive(Error, Debug)]
pub enum DaemonError {
    /// Connection refused, DNS failure, timeout, body read cut short.
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Nothing arrived from the daemon within the allowed wait.
    #[error("{url} sent nothing for {secs}s")]
    Stalled { url: String, secs: f64 },

    #[error("{url} returned {status}")]
    Status { url: String, status: u16 },

    #[error("could not decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

/// Everything an endpoint can answer with besides success.
#[derive(Debug)]
pub enum ApiError {
    /// Daemon did not answer the reachability probe.
    Unavailable(String),
    NotFound(String),
    /// The daemon was reachable but refused the operation.
    BadRequest(String),
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn hint(&self) -> Option<String> {
        match self {
            ApiError::Unavailable(_) => {
                Some("Check GET /ollama/status and that OLLAMA_API_BASE points at the daemon".to_string())
            }
            ApiError::NotFound(_) => Some("Check GET /ollama/models for installed model names".to_string()),
            ApiError::BadRequest(_) | ApiError::Internal(_) => None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let hint = self.hint();
        let error = match self {
            ApiError::Unavailable(m)
            | ApiError::NotFound(m)
            | ApiError::BadRequest(m)
            | ApiError::Internal(m) => m,
        };
        (status, Json(ErrorResponse { error, hint })).into_response()
    }
}
