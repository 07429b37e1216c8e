use async_trait::async_trait;

/// Speech-to-text collaborator. Implementations wrap an external acoustic
/// model and are treated as opaque; input is one playable audio segment.
#[async_trait]
pub trait TranscriptionEngine: Send + Sync {
    async fn transcribe(&self, audio_data: &[u8]) -> Result<String, TranscriptionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("audio decoding failed: {0}")]
    DecodingFailed(String),
    #[error("transcription failed: {0}")]
    TranscriptionFailed(String),
    #[error("engine configuration failed: {0}")]
    ConfigurationFailed(String),
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
}
