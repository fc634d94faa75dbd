use tracing::warn;

pub const DEFAULT_OLLAMA_BASE: &str = "http://localhost:11434";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const MIN_PULL_TIMEOUT_SECS: u64 = 300;

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    pub ollama_base_url: String,
    pub timeout_secs: u64,
    pub pull_timeout_secs: u64,
    pub cors_origins: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8000,
            ollama_base_url: DEFAULT_OLLAMA_BASE.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            pull_timeout_secs: MIN_PULL_TIMEOUT_SECS,
            cors_origins: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, reading keys through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port: u16 = match lookup("PORT") {
            Some(p) => p.parse().unwrap_or_else(|_| {
                warn!("[ollama-proxy] Invalid PORT value, defaulting to {}", defaults.port);
                defaults.port
            }),
            None => defaults.port,
        };

        let ollama_base_url = normalize_base_url(lookup("OLLAMA_API_BASE"));

        let timeout_secs = match lookup("OLLAMA_TIMEOUT_SECS") {
            Some(t) => match t.parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    warn!(
                        "[ollama-proxy] Invalid OLLAMA_TIMEOUT_SECS value, defaulting to {}",
                        DEFAULT_TIMEOUT_SECS
                    );
                    DEFAULT_TIMEOUT_SECS
                }
            },
            None => DEFAULT_TIMEOUT_SECS,
        };

        let pull_timeout_secs = match lookup("OLLAMA_PULL_TIMEOUT_SECS") {
            Some(t) => match t.parse::<u64>() {
                Ok(secs) if secs >= MIN_PULL_TIMEOUT_SECS => secs,
                Ok(secs) => {
                    warn!(
                        "[ollama-proxy] OLLAMA_PULL_TIMEOUT_SECS={} is too short for model downloads, using {}",
                        secs, MIN_PULL_TIMEOUT_SECS
                    );
                    MIN_PULL_TIMEOUT_SECS
                }
                Err(_) => {
                    warn!(
                        "[ollama-proxy] Invalid OLLAMA_PULL_TIMEOUT_SECS value, defaulting to {}",
                        MIN_PULL_TIMEOUT_SECS
                    );
                    MIN_PULL_TIMEOUT_SECS
                }
            },
            None => MIN_PULL_TIMEOUT_SECS,
        };

        let cors_origins = lookup("CORS_ORIGINS").filter(|s| !s.trim().is_empty());

        Self {
            port,
            ollama_base_url,
            timeout_secs,
            pull_timeout_secs,
            cors_origins,
        }
    }
}

fn normalize_base_url(raw: Option<String>) -> String {
    match raw {
        Some(url) if !url.trim().is_empty() => url.trim().trim_end_matches('/').to_string(),
        _ => DEFAULT_OLLAMA_BASE.to_string(),
    }
}
