mod audio_chunk;
mod meeting;

pub use audio_chunk::AudioChunk;
pub use meeting::{MeetingDraft, MeetingId, MeetingRecord};
