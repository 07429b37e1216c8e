use async_trait::async_trait;

use crate::application::ports::{SummarizationEngine, SummarizationError};

/// Echoes a canned summary so the pipeline runs without a language model
/// configured.
pub struct MockSummarizationEngine;

#[async_trait]
impl SummarizationEngine for MockSummarizationEngine {
    async fn summarize(&self, _text: &str) -> Result<String, SummarizationError> {
        Ok("The team met and discussed the project. They decided to continue. \
            Everyone should review the notes."
            .to_string())
    }
}
