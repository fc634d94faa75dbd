use crate::config::Config;
use crate::ollama::OllamaService;

/// Shared by every handler. Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub ollama: OllamaService,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let ollama = OllamaService::new(&config)?;
        Ok(Self { config, ollama })
    }
}
