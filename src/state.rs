use crate::domain::error::TranslatorError;
use crate::domain::traits::LlmGateway;
use crate::infrastructure::config::Config;
use crate::infrastructure::network::client::OllamaGateway;
use std::sync::Arc;

/// Read-only context shared by the CLI, REPL and web handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub gateway: Arc<dyn LlmGateway>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, TranslatorError> {
        let gateway = OllamaGateway::new(&config.ollama)?;
        Ok(Self::with_gateway(config, Arc::new(gateway)))
    }

    /// Build state around an existing gateway (tests, alternative backends)
    pub fn with_gateway(config: Config, gateway: Arc<dyn LlmGateway>) -> Self {
        Self {
            config: Arc::new(config),
            gateway,
        }
    }
}
