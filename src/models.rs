use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A model as reported by the daemon's `/api/tags`.
///
/// Fields the proxy doesn't use (`details`, `model`, ...) are kept in
/// `extra` so the record serializes back out unchanged.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ModelRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub modified_at: String,
    #[serde(default)]
    pub digest: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TagsResponse {
    #[serde(default)]
    pub models: Vec<ModelRecord>,
}

/// UI-facing projection of a [`ModelRecord`].
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct FormattedModel {
    pub id: String,
    pub name: String,
    pub display_name: String,
    pub size: u64,
    pub modified_at: String,
    pub digest: String,
}

impl FormattedModel {
    pub fn from_record(record: &ModelRecord, display_name: String) -> Self {
        Self {
            id: format!("ollama/{}", record.name),
            name: record.name.clone(),
            display_name,
            size: record.size,
            modified_at: record.modified_at.clone(),
            digest: record.digest.clone(),
        }
    }
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct ServerStatus {
    pub status: String,
    pub accessible: bool,
    pub base_url: String,
}

impl ServerStatus {
    pub fn new(accessible: bool, base_url: &str) -> Self {
        Self {
            status: if accessible { "running" } else { "unavailable" }.to_string(),
            accessible,
            base_url: base_url.to_string(),
        }
    }
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct HealthReport {
    pub service: String,
    pub status: String,
    pub accessible: bool,
    pub base_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl HealthReport {
    pub fn checked(accessible: bool, base_url: &str) -> Self {
        Self {
            service: "ollama".to_string(),
            status: if accessible { "healthy" } else { "unhealthy" }.to_string(),
            accessible,
            base_url: base_url.to_string(),
            error: None,
        }
    }

    pub fn failed(error: String, base_url: &str) -> Self {
        Self {
            error: Some(error),
            ..Self::checked(false, base_url)
        }
    }
}

/// Request body for the daemon's show/pull/delete endpoints.
#[derive(Debug, Serialize)]
pub struct DaemonModelRequest<'a> {
    pub name: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display_name::format_display_name;
    use serde_json::json;

    #[test]
    fn test_record_defaults_missing_fields() {
        let record: ModelRecord = serde_json::from_value(json!({ "name": "phi3" })).unwrap();
        assert_eq!(record.name, "phi3");
        assert_eq!(record.size, 0);
        assert_eq!(record.modified_at, "");
        assert_eq!(record.digest, "");
        assert!(record.extra.is_empty());
    }

    #[test]
    fn test_record_keeps_unknown_fields() {
        let raw = json!({
            "name": "llama3.1:8b",
            "model": "llama3.1:8b",
            "size": 4920753328u64,
            "modified_at": "2024-08-01T10:00:00Z",
            "digest": "46e0c10c039e",
            "details": { "family": "llama", "parameter_size": "8.0B" }
        });
        let record: ModelRecord = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(record.extra["details"]["family"], "llama");
        assert_eq!(serde_json::to_value(&record).unwrap(), raw);
    }

    #[test]
    fn test_tags_without_models_array() {
        let tags: TagsResponse = serde_json::from_value(json!({})).unwrap();
        assert!(tags.models.is_empty());
    }

    #[test]
    fn test_formatted_projection() {
        let record = ModelRecord {
            name: "llama3.1-8b".to_string(),
            size: 42,
            modified_at: "2024-08-01T10:00:00Z".to_string(),
            digest: "abc".to_string(),
            extra: Map::new(),
        };
        let formatted = FormattedModel::from_record(&record, format_display_name(&record.name));
        assert_eq!(formatted.id, "ollama/llama3.1-8b");
        assert_eq!(formatted.name, "llama3.1-8b");
        assert_eq!(formatted.display_name, "Llama 3.1 (8B)");
        assert_eq!(formatted.size, 42);
        assert_eq!(formatted.digest, "abc");
    }

    #[test]
    fn test_health_report_error_only_when_failed() {
        let ok = serde_json::to_value(HealthReport::checked(true, "http://x")).unwrap();
        assert_eq!(ok["status"], "healthy");
        assert!(ok.get("error").is_none());

        let failed = HealthReport::failed("boom".to_string(), "http://x");
        assert_eq!(failed.status, "unhealthy");
        assert!(!failed.accessible);
        assert_eq!(failed.error.as_deref(), Some("boom"));
    }

    #[test]
    fn test_server_status_labels() {
        assert_eq!(ServerStatus::new(true, "u").status, "running");
        assert_eq!(ServerStatus::new(false, "u").status, "unavailable");
    }
}
