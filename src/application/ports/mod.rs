mod audio_chunker;
mod meeting_repository;
mod report_renderer;
mod repository_error;
mod summarization_engine;
mod transcription_engine;

pub use audio_chunker::{AudioChunker, ChunkArtifact, MaterializedChunk};
pub use meeting_repository::MeetingRepository;
pub use report_renderer::{RenderError, ReportRenderer, report_file_name};
pub use repository_error::RepositoryError;
pub use summarization_engine::{SummarizationEngine, SummarizationError};
pub use transcription_engine::{TranscriptionEngine, TranscriptionError};
