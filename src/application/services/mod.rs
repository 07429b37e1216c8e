mod meeting_pipeline;
mod summary_structurer;
mod transcript_assembler;

pub use meeting_pipeline::{
    MAX_SUMMARY_INPUT_TOKENS, MeetingPipelineService, PipelineError, ProcessedMeeting,
    SUMMARIZATION_FAILURE_MESSAGE, cap_input_tokens,
};
pub use summary_structurer::{
    NO_ACTIONS_PLACEHOLDER, NO_DECISIONS_PLACEHOLDER, StructuredSummary, structure_summary,
};
pub use transcript_assembler::assemble_transcript;
