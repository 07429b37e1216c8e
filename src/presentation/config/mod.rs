mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    AudioSettings, DatabaseSettings, LoggingSettings, ReportSettings, ServerSettings, Settings,
    SummarizationProviderSetting, SummarizationSettings, TranscriptionProviderSetting,
    TranscriptionSettings,
};
