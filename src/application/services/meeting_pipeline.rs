use std::path::PathBuf;
use std::sync::Arc;

use crate::application::ports::{
    AudioChunker, MaterializedChunk, MeetingRepository, RenderError, ReportRenderer,
    RepositoryError, SummarizationEngine, TranscriptionEngine, TranscriptionError,
    report_file_name,
};
use crate::domain::{MeetingDraft, MeetingId};

use super::summary_structurer::{
    NO_ACTIONS_PLACEHOLDER, NO_DECISIONS_PLACEHOLDER, StructuredSummary, structure_summary,
};
use super::transcript_assembler::assemble_transcript;

/// Longer input is silently truncated to this many whitespace-delimited
/// tokens before summarization, favoring availability over completeness.
pub const MAX_SUMMARY_INPUT_TOKENS: usize = 1000;

/// User-visible text substituted when the summarization engine fails.
pub const SUMMARIZATION_FAILURE_MESSAGE: &str =
    "[ERROR] Summarization failed. Please try again later.";

pub struct MeetingPipelineService<C, T, S, R, P>
where
    C: AudioChunker + ?Sized,
    T: TranscriptionEngine + ?Sized,
    S: SummarizationEngine + ?Sized,
    R: MeetingRepository + ?Sized,
    P: ReportRenderer + ?Sized,
{
    chunker: Arc<C>,
    transcription_engine: Arc<T>,
    summarization_engine: Arc<S>,
    repository: Arc<R>,
    renderer: Arc<P>,
    report_dir: PathBuf,
}

impl<C, T, S, R, P> MeetingPipelineService<C, T, S, R, P>
where
    C: AudioChunker + ?Sized,
    T: TranscriptionEngine + ?Sized,
    S: SummarizationEngine + ?Sized,
    R: MeetingRepository + ?Sized,
    P: ReportRenderer + ?Sized,
{
    pub fn new(
        chunker: Arc<C>,
        transcription_engine: Arc<T>,
        summarization_engine: Arc<S>,
        repository: Arc<R>,
        renderer: Arc<P>,
        report_dir: PathBuf,
    ) -> Self {
        Self {
            chunker,
            transcription_engine,
            summarization_engine,
            repository,
            renderer,
            report_dir,
        }
    }

    /// Runs the full pipeline: chunk, transcribe, assemble, summarize,
    /// persist, render. Only decoding, storage, and rendering abort the
    /// request; segment and summarization failures degrade in place.
    #[tracing::instrument(skip(self, audio_data), fields(bytes = audio_data.len(), filename = %filename))]
    pub async fn process(
        &self,
        audio_data: &[u8],
        filename: &str,
    ) -> Result<ProcessedMeeting, PipelineError> {
        let chunks = self
            .chunker
            .chunk(audio_data)
            .await
            .map_err(PipelineError::Decoding)?;

        tracing::info!(segments = chunks.len(), "Audio split into segments");

        let mut chunk_texts = Vec::with_capacity(chunks.len());
        for materialized in chunks {
            chunk_texts.push(self.transcribe_chunk(materialized).await);
        }

        let transcript = assemble_transcript(&chunk_texts);
        let summarized = self.summarize(&transcript).await;

        let draft = MeetingDraft {
            transcript: transcript.clone(),
            summary: summarized.summary.clone(),
            action_items: summarized.actions,
            decisions: summarized.decisions,
        };
        let id = self.repository.insert(&draft).await?;

        let record = self.repository.get_by_id(id).await?.ok_or_else(|| {
            RepositoryError::QueryFailed(format!("meeting {} missing after insert", id))
        })?;

        let report = self.renderer.render(&record)?;
        let report_path = self.report_dir.join(report_file_name(id));
        tokio::fs::write(&report_path, &report)
            .await
            .map_err(|e| PipelineError::Rendering(RenderError::Io(e)))?;

        tracing::info!(
            meeting_id = %id,
            transcript_chars = transcript.len(),
            report = %report_path.display(),
            "Meeting processed"
        );

        Ok(ProcessedMeeting {
            id,
            transcript,
            summary: summarized.summary,
            report_link: format!("/export/{}", id),
        })
    }

    /// Summarizes a transcript without persisting anything. Engine failure
    /// degrades to a fixed message instead of propagating, so a transcript
    /// stays deliverable even when the summarizer is down.
    pub async fn summarize(&self, transcript: &str) -> StructuredSummary {
        let capped = cap_input_tokens(transcript, MAX_SUMMARY_INPUT_TOKENS);

        match self.summarization_engine.summarize(&capped).await {
            Ok(raw) => structure_summary(raw.trim()),
            Err(e) => {
                tracing::error!(error = %e, "Summarization failed, substituting fixed message");
                StructuredSummary {
                    summary: SUMMARIZATION_FAILURE_MESSAGE.to_string(),
                    decisions: NO_DECISIONS_PLACEHOLDER.to_string(),
                    actions: NO_ACTIONS_PLACEHOLDER.to_string(),
                }
            }
        }
    }

    /// One failed segment never blocks the others: the failure is logged and
    /// the segment contributes an empty string. The artifact is dropped on
    /// every path, which removes its scratch file.
    async fn transcribe_chunk(&self, materialized: MaterializedChunk) -> String {
        let MaterializedChunk { chunk, artifact } = materialized;

        let result = self
            .transcription_engine
            .transcribe(artifact.wav_bytes())
            .await;
        drop(artifact);

        match result {
            Ok(text) => text,
            Err(e) => {
                tracing::error!(
                    sequence_index = chunk.sequence_index,
                    start_offset_ms = chunk.start_offset_ms,
                    error = %e,
                    "Segment transcription failed, skipping"
                );
                String::new()
            }
        }
    }
}

/// Keeps the first `max_tokens` whitespace-delimited tokens; shorter input
/// passes through unchanged.
pub fn cap_input_tokens(text: &str, max_tokens: usize) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() > max_tokens {
        words[..max_tokens].join(" ")
    } else {
        text.to_string()
    }
}

#[derive(Debug, Clone)]
pub struct ProcessedMeeting {
    pub id: MeetingId,
    pub transcript: String,
    pub summary: String,
    pub report_link: String,
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("audio decoding: {0}")]
    Decoding(TranscriptionError),
    #[error("storage: {0}")]
    Storage(#[from] RepositoryError),
    #[error("report rendering: {0}")]
    Rendering(#[from] RenderError),
}
