use thiserror::Error;

#[derive(Error, Debug)]
pub enum TranslatorError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid language: {0}")]
    Language(String),

    #[error("Backend returned {status}: {body}")]
    Backend { status: u16, body: String },

    #[error("Backend response has no `response` field")]
    MissingResponse,
}

impl TranslatorError {
    /// True when the transport gave up waiting for the backend.
    pub fn is_timeout(&self) -> bool {
        matches!(self, TranslatorError::Http(e) if e.is_timeout())
    }
}
