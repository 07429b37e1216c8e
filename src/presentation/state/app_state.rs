use std::sync::Arc;

use crate::application::ports::{
    AudioChunker, MeetingRepository, ReportRenderer, SummarizationEngine, TranscriptionEngine,
};
use crate::application::services::MeetingPipelineService;

pub struct AppState<C, T, S, R, P>
where
    C: AudioChunker + ?Sized,
    T: TranscriptionEngine + ?Sized,
    S: SummarizationEngine + ?Sized,
    R: MeetingRepository + ?Sized,
    P: ReportRenderer + ?Sized,
{
    pub pipeline: Arc<MeetingPipelineService<C, T, S, R, P>>,
    pub repository: Arc<R>,
    pub renderer: Arc<P>,
    pub max_upload_bytes: usize,
}

impl<C, T, S, R, P> Clone for AppState<C, T, S, R, P>
where
    C: AudioChunker + ?Sized,
    T: TranscriptionEngine + ?Sized,
    S: SummarizationEngine + ?Sized,
    R: MeetingRepository + ?Sized,
    P: ReportRenderer + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            pipeline: Arc::clone(&self.pipeline),
            repository: Arc::clone(&self.repository),
            renderer: Arc::clone(&self.renderer),
            max_upload_bytes: self.max_upload_bytes,
        }
    }
}
