mod mock_summarization_engine;
mod openai_summarizer_engine;
mod summarization_engine_factory;

pub use mock_summarization_engine::MockSummarizationEngine;
pub use openai_summarizer_engine::OpenAiSummarizerEngine;
pub use summarization_engine_factory::{SummarizationEngineFactory, SummarizationProvider};
