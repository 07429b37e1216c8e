use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;

use crate::application::ports::{SummarizationEngine, SummarizationError};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

const SYSTEM_PROMPT: &str = "You are a meeting summarizer. Summarize the \
supplied transcript in plain prose sentences. Mention decisions that were \
made and work that participants should do.";

/// Abstractive summarization over an OpenAI-compatible `/chat/completions`
/// endpoint. Single attempt; callers handle degradation.
pub struct OpenAiSummarizerEngine {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenAiSummarizerEngine {
    pub fn new(
        api_key: String,
        base_url: Option<String>,
        model: String,
    ) -> Result<Self, SummarizationError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| SummarizationError::ConfigurationFailed(format!("http client: {}", e)))?;

        Ok(Self {
            client,
            api_key,
            base_url: base_url.unwrap_or_else(|| "https://api.openai.com/v1".to_string()),
            model,
        })
    }
}

#[async_trait]
impl SummarizationEngine for OpenAiSummarizerEngine {
    async fn summarize(&self, text: &str) -> Result<String, SummarizationError> {
        let url = format!("{}/chat/completions", self.base_url);

        let body = json!({
            "model": self.model,
            "messages": [
                {"role": "system", "content": SYSTEM_PROMPT},
                {"role": "user", "content": text},
            ],
            "temperature": 0.2,
        });

        tracing::debug!(model = %self.model, chars = text.len(), "Requesting summary");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| SummarizationError::ApiRequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(SummarizationError::ApiRequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let payload: serde_json::Value = response
            .json()
            .await
            .map_err(|e| SummarizationError::ApiRequestFailed(format!("body: {}", e)))?;

        let summary = payload["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| {
                SummarizationError::SummarizationFailed(
                    "response contained no completion text".to_string(),
                )
            })?;

        tracing::debug!(chars = summary.len(), "Summary received");

        Ok(summary.trim().to_string())
    }
}
