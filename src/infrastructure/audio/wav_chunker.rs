use std::path::PathBuf;

use async_trait::async_trait;
use uuid::Uuid;

use crate::application::ports::{
    AudioChunker, ChunkArtifact, MaterializedChunk, TranscriptionError,
};
use crate::domain::AudioChunk;

use super::audio_decoder::{TARGET_SAMPLE_RATE, decode_to_pcm};

/// Splits a recording into consecutive segments of at most
/// `max_chunk_seconds`, each written to the scratch directory as an
/// independently playable 16-bit PCM WAV file.
pub struct WavAudioChunker {
    scratch_dir: PathBuf,
    max_chunk_seconds: u64,
}

impl WavAudioChunker {
    pub fn new(scratch_dir: PathBuf, max_chunk_seconds: u64) -> Self {
        Self {
            scratch_dir,
            max_chunk_seconds,
        }
    }

    /// Pure split: consecutive, non-overlapping, source order, covering the
    /// full duration with no gaps. Segment count is ceil(duration / max).
    pub fn split(samples: &[f32], max_chunk_seconds: u64) -> Vec<AudioChunk> {
        let samples_per_chunk = (max_chunk_seconds.max(1) * TARGET_SAMPLE_RATE as u64) as usize;
        let mut chunks = Vec::new();

        let mut start = 0usize;
        while start < samples.len() {
            let end = (start + samples_per_chunk).min(samples.len());
            chunks.push(AudioChunk {
                sequence_index: chunks.len(),
                start_offset_ms: sample_to_ms(start),
                end_offset_ms: sample_to_ms(end),
                samples: samples[start..end].to_vec(),
            });
            start = end;
        }

        chunks
    }

    fn write_artifact(
        &self,
        batch: &str,
        chunk: &AudioChunk,
    ) -> Result<ChunkArtifact, TranscriptionError> {
        let wav_bytes = encode_wav(&chunk.samples)?;
        let file_name = format!("{}_chunk_{}.wav", batch, chunk.start_offset_ms / 1000);
        let path = self.scratch_dir.join(file_name);

        std::fs::write(&path, &wav_bytes).map_err(|e| {
            TranscriptionError::TranscriptionFailed(format!(
                "segment write {}: {}",
                path.display(),
                e
            ))
        })?;

        Ok(ChunkArtifact::new(path, wav_bytes))
    }
}

#[async_trait]
impl AudioChunker for WavAudioChunker {
    async fn chunk(&self, audio_data: &[u8]) -> Result<Vec<MaterializedChunk>, TranscriptionError> {
        let samples = decode_to_pcm(audio_data)?;
        let chunks = Self::split(&samples, self.max_chunk_seconds);

        let batch = Uuid::new_v4().simple().to_string();
        let mut materialized = Vec::with_capacity(chunks.len());
        for chunk in chunks {
            let artifact = self.write_artifact(&batch, &chunk)?;
            materialized.push(MaterializedChunk { chunk, artifact });
        }

        tracing::debug!(
            segments = materialized.len(),
            scratch_dir = %self.scratch_dir.display(),
            "Segment artifacts written"
        );

        Ok(materialized)
    }
}

fn sample_to_ms(sample_index: usize) -> u64 {
    sample_index as u64 * 1000 / TARGET_SAMPLE_RATE as u64
}

/// 16-bit PCM WAV at the pipeline sample rate, encoded in memory.
pub fn encode_wav(samples: &[f32]) -> Result<Vec<u8>, TranscriptionError> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: TARGET_SAMPLE_RATE,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut cursor = std::io::Cursor::new(Vec::new());
    {
        let mut writer = hound::WavWriter::new(&mut cursor, spec)
            .map_err(|e| TranscriptionError::TranscriptionFailed(format!("wav encode: {}", e)))?;
        for &sample in samples {
            let quantized = (sample.clamp(-1.0, 1.0) * i16::MAX as f32) as i16;
            writer.write_sample(quantized).map_err(|e| {
                TranscriptionError::TranscriptionFailed(format!("wav encode: {}", e))
            })?;
        }
        writer
            .finalize()
            .map_err(|e| TranscriptionError::TranscriptionFailed(format!("wav encode: {}", e)))?;
    }

    Ok(cursor.into_inner())
}
