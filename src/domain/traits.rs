use crate::domain::error::TranslatorError;
use crate::domain::model::Verdict;
use async_trait::async_trait;

/// Trait for text generation backends
///
/// One blocking round trip per call: the prompt goes in, the backend's raw
/// reply text comes out. Implementations must not retry.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Send a rendered prompt and return the raw reply
    async fn generate(&self, prompt: &str) -> Result<String, TranslatorError>;

    /// Identifier of the model the gateway talks to
    fn model(&self) -> &str;
}

/// Trait for target-language syntax checks
pub trait SyntaxValidator: Send + Sync {
    fn validate(&self, code: &str) -> Verdict;
}
