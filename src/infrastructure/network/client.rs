use crate::domain::error::TranslatorError;
use crate::domain::traits::LlmGateway;
use crate::infrastructure::config::OllamaConfig;
use crate::infrastructure::network::http::create_client;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

// Ollama /api/generate request body
#[derive(Serialize, Debug)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

// Only the generated text matters; the envelope carries timings etc. too
#[derive(Deserialize, Debug)]
struct GenerateResponse {
    response: Option<String>,
}

#[derive(Serialize, Debug)]
struct ShowRequest<'a> {
    name: &'a str,
}

/// Gateway to a local Ollama server
pub struct OllamaGateway {
    client: Client,
    base_url: String,
    model: String,
}

impl OllamaGateway {
    pub fn new(config: &OllamaConfig) -> Result<Self, TranslatorError> {
        let base_url = config.base_url.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(TranslatorError::Config(
                "Ollama base_url not configured".to_string(),
            ));
        }
        if config.model.trim().is_empty() {
            return Err(TranslatorError::Config(
                "Ollama model not configured".to_string(),
            ));
        }
        if config.timeout_secs == 0 {
            return Err(TranslatorError::Config(
                "Ollama timeout must be at least 1 second".to_string(),
            ));
        }

        Ok(Self {
            client: create_client(config.timeout_secs)?,
            base_url,
            model: config.model.trim().to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch model details from `/api/show`
    pub async fn model_info(&self) -> Result<serde_json::Value, TranslatorError> {
        let url = format!("{}/api/show", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&ShowRequest { name: &self.model })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TranslatorError::Backend {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<serde_json::Value>().await?)
    }
}

#[async_trait]
impl LlmGateway for OllamaGateway {
    async fn generate(&self, prompt: &str) -> Result<String, TranslatorError> {
        let url = format!("{}/api/generate", self.base_url);
        debug!(%url, model = %self.model, "sending generate request");

        let body = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
        };

        let response = self.client.post(&url).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TranslatorError::Backend {
                status: status.as_u16(),
                body,
            });
        }

        let envelope = response.json::<GenerateResponse>().await?;
        envelope.response.ok_or(TranslatorError::MissingResponse)
    }

    fn model(&self) -> &str {
        &self.model
    }
}
