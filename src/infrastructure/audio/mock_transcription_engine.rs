use async_trait::async_trait;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};

/// Returns a fixed line per segment. Lets the pipeline run end to end
/// without a speech model configured.
pub struct MockTranscriptionEngine;

#[async_trait]
impl TranscriptionEngine for MockTranscriptionEngine {
    async fn transcribe(&self, _audio_data: &[u8]) -> Result<String, TranscriptionError> {
        Ok("Mock segment transcript.".to_string())
    }
}
