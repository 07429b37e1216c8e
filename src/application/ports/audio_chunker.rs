use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::domain::AudioChunk;

use super::TranscriptionError;

/// Splits a source recording into bounded-duration playable segments.
///
/// Implementations write each segment to a scratch location; the returned
/// artifact removes its file when dropped, so segment files never outlive
/// the transcription attempt that consumed them.
#[async_trait]
pub trait AudioChunker: Send + Sync {
    async fn chunk(&self, audio_data: &[u8]) -> Result<Vec<MaterializedChunk>, TranscriptionError>;
}

pub struct MaterializedChunk {
    pub chunk: AudioChunk,
    pub artifact: ChunkArtifact,
}

/// Handle to a segment file in the scratch directory. Dropping the handle
/// deletes the file, success or failure.
pub struct ChunkArtifact {
    path: PathBuf,
    wav_bytes: Vec<u8>,
}

impl ChunkArtifact {
    pub fn new(path: PathBuf, wav_bytes: Vec<u8>) -> Self {
        Self { path, wav_bytes }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn wav_bytes(&self) -> &[u8] {
        &self.wav_bytes
    }
}

impl Drop for ChunkArtifact {
    fn drop(&mut self) {
        if let Err(e) = std::fs::remove_file(&self.path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Failed to remove segment artifact"
                );
            }
        }
    }
}
