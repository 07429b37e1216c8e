/// A bounded-duration segment of a source recording, in decoded PCM form.
///
/// Chunks are ephemeral: they exist only for the duration of one
/// transcription pass and are never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioChunk {
    pub sequence_index: usize,
    pub start_offset_ms: u64,
    pub end_offset_ms: u64,
    pub samples: Vec<f32>,
}
