use std::sync::Arc;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};

use super::mock_transcription_engine::MockTranscriptionEngine;
use super::openai_whisper_engine::OpenAiWhisperEngine;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TranscriptionProvider {
    OpenAi,
    Mock,
}

pub struct TranscriptionEngineFactory;

impl TranscriptionEngineFactory {
    pub fn create(
        provider: TranscriptionProvider,
        model: &str,
        api_key: Option<String>,
        base_url: Option<String>,
    ) -> Result<Arc<dyn TranscriptionEngine>, TranscriptionError> {
        match provider {
            TranscriptionProvider::OpenAi => {
                let key = api_key.filter(|k| !k.is_empty()).ok_or_else(|| {
                    TranscriptionError::ConfigurationFailed(
                        "API key required for the OpenAI transcription provider".to_string(),
                    )
                })?;
                let engine = OpenAiWhisperEngine::new(key, base_url, model.to_string())?;
                Ok(Arc::new(engine))
            }
            TranscriptionProvider::Mock => Ok(Arc::new(MockTranscriptionEngine)),
        }
    }
}
