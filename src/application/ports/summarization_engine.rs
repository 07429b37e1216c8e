use async_trait::async_trait;

/// Abstractive summarization collaborator wrapping an external language
/// model. Callers are expected to cap input length before invoking.
#[async_trait]
pub trait SummarizationEngine: Send + Sync {
    async fn summarize(&self, text: &str) -> Result<String, SummarizationError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SummarizationError {
    #[error("summarization failed: {0}")]
    SummarizationFailed(String),
    #[error("engine configuration failed: {0}")]
    ConfigurationFailed(String),
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
}
