use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::Environment;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub audio: AudioSettings,
    pub transcription: TranscriptionSettings,
    pub summarization: SummarizationSettings,
    pub report: ReportSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AudioSettings {
    /// Upper bound on segment duration handed to the speech model.
    pub max_chunk_seconds: u64,
    pub scratch_dir: String,
    pub max_file_size_mb: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptionSettings {
    pub provider: TranscriptionProviderSetting,
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub base_url: Option<String>,
    pub model: String,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranscriptionProviderSetting {
    #[serde(rename = "openai")]
    OpenAi,
    Mock,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SummarizationSettings {
    pub provider: SummarizationProviderSetting,
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub base_url: Option<String>,
    pub model: String,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummarizationProviderSetting {
    #[serde(rename = "openai")]
    OpenAi,
    Mock,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportSettings {
    pub output_dir: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Settings {
    /// Layered load: built-in defaults, then `appsettings.{environment}`,
    /// then `APP_`-prefixed environment variables (`APP_SERVER__PORT` etc).
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        let file = format!("appsettings.{}", environment.as_str().to_lowercase());

        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000_i64)?
            .set_default("database.url", "sqlite://meetings.db")?
            .set_default("database.max_connections", 5_i64)?
            .set_default("audio.max_chunk_seconds", 30_i64)?
            .set_default("audio.scratch_dir", "temp_files")?
            .set_default("audio.max_file_size_mb", 200_i64)?
            .set_default("transcription.provider", "mock")?
            .set_default("transcription.model", "whisper-1")?
            .set_default("summarization.provider", "mock")?
            .set_default("summarization.model", "gpt-4o-mini")?
            .set_default("report.output_dir", "static")?
            .set_default("logging.level", "info")?
            .set_default("logging.enable_json", false)?
            .add_source(File::with_name(&file).required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
