use std::sync::Arc;

use crate::application::ports::{SummarizationEngine, SummarizationError};

use super::mock_summarization_engine::MockSummarizationEngine;
use super::openai_summarizer_engine::OpenAiSummarizerEngine;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SummarizationProvider {
    OpenAi,
    Mock,
}

pub struct SummarizationEngineFactory;

impl SummarizationEngineFactory {
    pub fn create(
        provider: SummarizationProvider,
        model: &str,
        api_key: Option<String>,
        base_url: Option<String>,
    ) -> Result<Arc<dyn SummarizationEngine>, SummarizationError> {
        match provider {
            SummarizationProvider::OpenAi => {
                let key = api_key.filter(|k| !k.is_empty()).ok_or_else(|| {
                    SummarizationError::ConfigurationFailed(
                        "API key required for the OpenAI summarization provider".to_string(),
                    )
                })?;
                let engine = OpenAiSummarizerEngine::new(key, base_url, model.to_string())?;
                Ok(Arc::new(engine))
            }
            SummarizationProvider::Mock => Ok(Arc::new(MockSummarizationEngine)),
        }
    }
}
