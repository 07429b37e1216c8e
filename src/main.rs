use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use tokio::net::TcpListener;

use plenum::application::services::MeetingPipelineService;
use plenum::infrastructure::audio::{
    TranscriptionEngineFactory, TranscriptionProvider, WavAudioChunker,
};
use plenum::infrastructure::llm::{SummarizationEngineFactory, SummarizationProvider};
use plenum::infrastructure::observability::{TracingConfig, init_tracing};
use plenum::infrastructure::persistence::{SqliteMeetingRepository, create_pool};
use plenum::infrastructure::report::PdfReportRenderer;
use plenum::presentation::{
    AppState, Environment, Settings, SummarizationProviderSetting, TranscriptionProviderSetting,
    create_router,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::try_from(
        std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "local".to_string()),
    )
    .map_err(anyhow::Error::msg)?;

    let settings = Settings::load(environment)?;

    init_tracing(
        TracingConfig {
            environment: environment.to_string(),
            json_format: settings.logging.enable_json,
            default_level: settings.logging.level.clone(),
        },
        settings.server.port,
    );

    tokio::fs::create_dir_all(&settings.audio.scratch_dir).await?;
    tokio::fs::create_dir_all(&settings.report.output_dir).await?;

    let pool = create_pool(&settings.database.url, settings.database.max_connections).await?;
    let repository = Arc::new(SqliteMeetingRepository::new(pool));
    repository.ensure_schema().await?;

    let transcription_provider = match settings.transcription.provider {
        TranscriptionProviderSetting::OpenAi => TranscriptionProvider::OpenAi,
        TranscriptionProviderSetting::Mock => TranscriptionProvider::Mock,
    };
    let transcription_engine = TranscriptionEngineFactory::create(
        transcription_provider,
        &settings.transcription.model,
        Some(settings.transcription.api_key.clone()),
        settings.transcription.base_url.clone(),
    )?;

    let summarization_provider = match settings.summarization.provider {
        SummarizationProviderSetting::OpenAi => SummarizationProvider::OpenAi,
        SummarizationProviderSetting::Mock => SummarizationProvider::Mock,
    };
    let summarization_engine = SummarizationEngineFactory::create(
        summarization_provider,
        &settings.summarization.model,
        Some(settings.summarization.api_key.clone()),
        settings.summarization.base_url.clone(),
    )?;

    let chunker = Arc::new(WavAudioChunker::new(
        PathBuf::from(&settings.audio.scratch_dir),
        settings.audio.max_chunk_seconds,
    ));
    let renderer = Arc::new(PdfReportRenderer::new());

    let pipeline = Arc::new(MeetingPipelineService::new(
        chunker,
        transcription_engine,
        summarization_engine,
        Arc::clone(&repository),
        Arc::clone(&renderer),
        PathBuf::from(&settings.report.output_dir),
    ));

    let state = AppState {
        pipeline,
        repository,
        renderer,
        max_upload_bytes: settings.audio.max_file_size_mb * 1024 * 1024,
    };

    let router = create_router(state);

    let addr: SocketAddr =
        format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
