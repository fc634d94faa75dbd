use anyhow::Context;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde_json::Value;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{error, info, warn};

use crate::config::Config;
use crate::display_name;
use crate::error::DaemonError;
use crate::models::{DaemonModelRequest, FormattedModel, ModelRecord, TagsResponse};

/// Client for the Ollama daemon's HTTP API.
///
/// Every network operation comes in two forms: `try_*` returns the
/// [`DaemonError`], the plain form logs it and hands back a sentinel
/// (`false`, empty list, `None`). Neither form ever panics on a bad
/// daemon response.
#[derive(Clone, Debug)]
pub struct OllamaService {
    base_url: String,
    client: Client,
    timeout: Duration,
    pull_timeout: Duration,
}

impl OllamaService {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        // No idle pool: each call opens its own connection and drops it when done.
        let client = Client::builder()
            .pool_max_idle_per_host(0)
            .build()
            .context("Failed to build HTTP client for Ollama")?;

        Ok(Self {
            base_url: config.ollama_base_url.clone(),
            client,
            timeout: Duration::from_secs(config.timeout_secs),
            pull_timeout: Duration::from_secs(config.pull_timeout_secs),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Sends `request`, treating anything but 200 as an error.
    async fn send(&self, request: RequestBuilder, url: &str) -> Result<Response, DaemonError> {
        let response = request.send().await.map_err(|source| DaemonError::Transport {
            url: url.to_string(),
            source,
        })?;

        if response.status() != StatusCode::OK {
            return Err(DaemonError::Status {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }
        Ok(response)
    }

    pub async fn try_check_status(&self) -> Result<(), DaemonError> {
        let url = self.url("/api/tags");
        self.send(self.client.get(&url).timeout(self.timeout), &url)
            .await
            .map(|_| ())
    }

    /// True only when `/api/tags` answers 200.
    pub async fn check_status(&self) -> bool {
        match self.try_check_status().await {
            Ok(()) => true,
            Err(e) => {
                warn!("[ollama-proxy] Ollama server not accessible: {}", e);
                false
            }
        }
    }

    pub async fn try_list_models(&self) -> Result<Vec<ModelRecord>, DaemonError> {
        let url = self.url("/api/tags");
        let response = self
            .send(self.client.get(&url).timeout(self.timeout), &url)
            .await?;
        let tags: TagsResponse = response
            .json()
            .await
            .map_err(|source| DaemonError::Decode { url, source })?;
        Ok(tags.models)
    }

    /// Installed models, or an empty list if the daemon couldn't be asked.
    pub async fn list_models(&self) -> Vec<ModelRecord> {
        match self.try_list_models().await {
            Ok(models) => {
                info!("[ollama-proxy] Found {} Ollama models", models.len());
                models
            }
            Err(e) => {
                error!("[ollama-proxy] Failed to get Ollama models: {}", e);
                Vec::new()
            }
        }
    }

    pub async fn try_get_model_info(&self, model_name: &str) -> Result<Value, DaemonError> {
        let url = self.url("/api/show");
        let request = self
            .client
            .post(&url)
            .timeout(self.timeout)
            .json(&DaemonModelRequest { name: model_name });
        let response = self.send(request, &url).await?;
        response
            .json()
            .await
            .map_err(|source| DaemonError::Decode { url, source })
    }

    /// Raw `/api/show` body for `model_name`, `None` if the daemon has no
    /// such model or couldn't be reached.
    pub async fn get_model_info(&self, model_name: &str) -> Option<Value> {
        match self.try_get_model_info(model_name).await {
            Ok(info) => Some(info),
            Err(e @ DaemonError::Status { .. }) => {
                warn!("[ollama-proxy] Failed to get model info for {}: {}", model_name, e);
                None
            }
            Err(e) => {
                error!("[ollama-proxy] Error getting model info for {}: {}", model_name, e);
                None
            }
        }
    }

    /// Downloads `model_name`. Returns once the daemon has finished
    /// streaming its progress, which can take minutes.
    ///
    /// `pull_timeout` bounds each wait (for the response, then for every
    /// progress chunk), not the download as a whole.
    pub async fn try_pull_model(&self, model_name: &str) -> Result<(), DaemonError> {
        let url = self.url("/api/pull");
        let request = self
            .client
            .post(&url)
            .json(&DaemonModelRequest { name: model_name });
        let mut response = timeout(self.pull_timeout, self.send(request, &url))
            .await
            .map_err(|_| self.stalled(&url))??;

        loop {
            let chunk = timeout(self.pull_timeout, response.chunk())
                .await
                .map_err(|_| self.stalled(&url))?
                .map_err(|source| DaemonError::Transport {
                    url: url.clone(),
                    source,
                })?;
            if chunk.is_none() {
                return Ok(());
            }
        }
    }

    fn stalled(&self, url: &str) -> DaemonError {
        DaemonError::Stalled {
            url: url.to_string(),
            secs: self.pull_timeout.as_secs_f64(),
        }
    }

    pub async fn pull_model(&self, model_name: &str) -> bool {
        match self.try_pull_model(model_name).await {
            Ok(()) => {
                info!("[ollama-proxy] Successfully pulled model: {}", model_name);
                true
            }
            Err(e) => {
                error!("[ollama-proxy] Failed to pull model {}: {}", model_name, e);
                false
            }
        }
    }

    pub async fn try_delete_model(&self, model_name: &str) -> Result<(), DaemonError> {
        let url = self.url("/api/delete");
        let request = self
            .client
            .delete(&url)
            .timeout(self.timeout)
            .json(&DaemonModelRequest { name: model_name });
        self.send(request, &url).await.map(|_| ())
    }

    pub async fn delete_model(&self, model_name: &str) -> bool {
        match self.try_delete_model(model_name).await {
            Ok(()) => {
                info!("[ollama-proxy] Successfully deleted model: {}", model_name);
                true
            }
            Err(e) => {
                error!("[ollama-proxy] Failed to delete model {}: {}", model_name, e);
                false
            }
        }
    }

    pub fn format_display_name(&self, model_name: &str) -> String {
        display_name::format_display_name(model_name)
    }

    /// [`list_models`](Self::list_models) projected for the UI, same order.
    pub async fn list_formatted_models(&self) -> Vec<FormattedModel> {
        self.list_models()
            .await
            .iter()
            .map(|record| FormattedModel::from_record(record, self.format_display_name(&record.name)))
            .collect()
    }
}
