pub mod audio_decoder;
mod mock_transcription_engine;
mod openai_whisper_engine;
mod transcription_engine_factory;
mod wav_chunker;

pub use mock_transcription_engine::MockTranscriptionEngine;
pub use openai_whisper_engine::OpenAiWhisperEngine;
pub use transcription_engine_factory::{TranscriptionEngineFactory, TranscriptionProvider};
pub use wav_chunker::{WavAudioChunker, encode_wav};
