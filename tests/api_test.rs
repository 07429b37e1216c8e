use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use plenum::application::ports::{
    MeetingRepository, SummarizationEngine, SummarizationError, TranscriptionEngine,
    TranscriptionError,
};
use plenum::application::services::{MeetingPipelineService, SUMMARIZATION_FAILURE_MESSAGE};
use plenum::domain::MeetingDraft;
use plenum::infrastructure::audio::{WavAudioChunker, encode_wav};
use plenum::infrastructure::llm::MockSummarizationEngine;
use plenum::infrastructure::persistence::InMemoryMeetingRepository;
use plenum::infrastructure::report::PdfReportRenderer;
use plenum::presentation::{AppState, create_router};

const TEST_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
const BOUNDARY: &str = "plenum-test-boundary";

struct FixedTranscription(&'static str);

#[async_trait]
impl TranscriptionEngine for FixedTranscription {
    async fn transcribe(&self, _audio_data: &[u8]) -> Result<String, TranscriptionError> {
        Ok(self.0.to_string())
    }
}

struct FailingSummarization;

#[async_trait]
impl SummarizationEngine for FailingSummarization {
    async fn summarize(&self, _text: &str) -> Result<String, SummarizationError> {
        Err(SummarizationError::ApiRequestFailed("model offline".to_string()))
    }
}

fn create_test_app(
    scratch_dir: &Path,
    report_dir: &Path,
    repository: Arc<InMemoryMeetingRepository>,
    transcription: Arc<dyn TranscriptionEngine>,
    summarization: Arc<dyn SummarizationEngine>,
) -> axum::Router {
    let chunker = Arc::new(WavAudioChunker::new(scratch_dir.to_path_buf(), 30));
    let renderer = Arc::new(PdfReportRenderer::new());

    let pipeline = Arc::new(MeetingPipelineService::new(
        chunker,
        transcription,
        summarization,
        Arc::clone(&repository),
        Arc::clone(&renderer),
        report_dir.to_path_buf(),
    ));

    create_router(AppState {
        pipeline,
        repository,
        renderer,
        max_upload_bytes: TEST_MAX_UPLOAD_BYTES,
    })
}

fn default_test_app(scratch_dir: &Path, report_dir: &Path) -> axum::Router {
    create_test_app(
        scratch_dir,
        report_dir,
        Arc::new(InMemoryMeetingRepository::new()),
        Arc::new(FixedTranscription("Hello from the meeting.")),
        Arc::new(MockSummarizationEngine),
    )
}

fn test_wav_bytes() -> Vec<u8> {
    let samples: Vec<f32> = (0..16_000).map(|i| (i as f32 * 0.05).sin() * 0.3).collect();
    encode_wav(&samples).expect("test audio encodes")
}

fn multipart_upload(file_name: &str, bytes: &[u8]) -> (String, Vec<u8>) {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"file\"; filename=\"{}\"\r\n",
            file_name
        )
        .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: audio/wav\r\n\r\n");
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());

    (format!("multipart/form-data; boundary={}", BOUNDARY), body)
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn seed_record(repository: &InMemoryMeetingRepository, transcript: &str) -> i64 {
    repository
        .insert(&MeetingDraft {
            transcript: transcript.to_string(),
            summary: "### Summary:\n- seeded".to_string(),
            action_items: "- task".to_string(),
            decisions: "- decision".to_string(),
        })
        .await
        .unwrap()
        .as_i64()
}

#[tokio::test]
async fn given_running_server_when_health_check_then_returns_ok() {
    let scratch = tempfile::tempdir().unwrap();
    let reports = tempfile::tempdir().unwrap();
    let app = default_test_app(scratch.path(), reports.path());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn given_audio_upload_when_processing_then_returns_record_and_report_link() {
    let scratch = tempfile::tempdir().unwrap();
    let reports = tempfile::tempdir().unwrap();
    let app = default_test_app(scratch.path(), reports.path());

    let (content_type, body) = multipart_upload("standup.wav", &test_wav_bytes());
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/process_meeting")
                .header("content-type", content_type)
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    assert_eq!(json["meeting_id"], 1);
    assert_eq!(json["transcript"], "Hello from the meeting.");
    assert_eq!(json["pdf_link"], "/export/1");
    assert!(
        json["summary"]
            .as_str()
            .unwrap()
            .contains("### Summary:")
    );

    let report_path = reports.path().join("meeting_1_summary.pdf");
    assert!(report_path.exists(), "report should be written to disk");

    let leftover = std::fs::read_dir(scratch.path()).unwrap().count();
    assert_eq!(leftover, 0, "segment artifacts should be cleaned up");
}

#[tokio::test]
async fn given_undecodable_upload_when_processing_then_returns_server_fault() {
    let scratch = tempfile::tempdir().unwrap();
    let reports = tempfile::tempdir().unwrap();
    let app = default_test_app(scratch.path(), reports.path());

    let (content_type, body) = multipart_upload("noise.bin", b"not audio at all");
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/process_meeting")
                .header("content-type", content_type)
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = json_body(response).await;
    assert!(
        json["error"]
            .as_str()
            .unwrap()
            .starts_with("Processing failed")
    );
}

#[tokio::test]
async fn given_upload_without_file_when_processing_then_returns_bad_request() {
    let scratch = tempfile::tempdir().unwrap();
    let reports = tempfile::tempdir().unwrap();
    let app = default_test_app(scratch.path(), reports.path());

    let body = format!("--{}--\r\n", BOUNDARY);
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/process_meeting")
                .header(
                    "content-type",
                    format!("multipart/form-data; boundary={}", BOUNDARY),
                )
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn given_transcript_when_summarizing_then_returns_structured_summary() {
    let scratch = tempfile::tempdir().unwrap();
    let reports = tempfile::tempdir().unwrap();
    let app = default_test_app(scratch.path(), reports.path());

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/summarize")
                .header("content-type", "application/json")
                .body(Body::from(
                    r#"{"transcript": "We talked about the roadmap for an hour."}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    let summary = json["summary"].as_str().unwrap();
    assert!(summary.contains("### Summary:"));
    assert!(summary.contains("### Key Decisions:"));
    assert!(summary.contains("### Action Items:"));
}

#[tokio::test]
async fn given_empty_transcript_when_summarizing_then_returns_bad_request() {
    let scratch = tempfile::tempdir().unwrap();
    let reports = tempfile::tempdir().unwrap();
    let app = default_test_app(scratch.path(), reports.path());

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/summarize")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"transcript": "   "}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn given_failing_summarizer_when_summarizing_then_success_with_fixed_message() {
    let scratch = tempfile::tempdir().unwrap();
    let reports = tempfile::tempdir().unwrap();
    let app = create_test_app(
        scratch.path(),
        reports.path(),
        Arc::new(InMemoryMeetingRepository::new()),
        Arc::new(FixedTranscription("irrelevant")),
        Arc::new(FailingSummarization),
    );

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/summarize")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"transcript": "a transcript"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    assert_eq!(json["summary"], SUMMARIZATION_FAILURE_MESSAGE);
}

#[tokio::test]
async fn given_stored_meetings_when_searching_then_matching_records_returned() {
    let scratch = tempfile::tempdir().unwrap();
    let reports = tempfile::tempdir().unwrap();
    let repository = Arc::new(InMemoryMeetingRepository::new());
    seed_record(&repository, "budget review for May").await;
    seed_record(&repository, "engineering standup").await;

    let app = create_test_app(
        scratch.path(),
        reports.path(),
        Arc::clone(&repository),
        Arc::new(FixedTranscription("irrelevant")),
        Arc::new(MockSummarizationEngine),
    );

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/search")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"query": "budget"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    let results = json["results"].as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["transcript"], "budget review for May");
}

#[tokio::test]
async fn given_empty_query_when_searching_then_every_record_returned() {
    let scratch = tempfile::tempdir().unwrap();
    let reports = tempfile::tempdir().unwrap();
    let repository = Arc::new(InMemoryMeetingRepository::new());
    seed_record(&repository, "first meeting").await;
    seed_record(&repository, "second meeting").await;

    let app = create_test_app(
        scratch.path(),
        reports.path(),
        Arc::clone(&repository),
        Arc::new(FixedTranscription("irrelevant")),
        Arc::new(MockSummarizationEngine),
    );

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/search")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"query": ""}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    let json = json_body(response).await;
    assert_eq!(json["results"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn given_no_matches_when_searching_then_empty_success_not_fault() {
    let scratch = tempfile::tempdir().unwrap();
    let reports = tempfile::tempdir().unwrap();
    let app = default_test_app(scratch.path(), reports.path());

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/search")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"query": "nothing matches this"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    assert_eq!(json["results"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn given_stored_meeting_when_exporting_then_pdf_returned() {
    let scratch = tempfile::tempdir().unwrap();
    let reports = tempfile::tempdir().unwrap();
    let repository = Arc::new(InMemoryMeetingRepository::new());
    let id = seed_record(&repository, "exported meeting transcript").await;

    let app = create_test_app(
        scratch.path(),
        reports.path(),
        Arc::clone(&repository),
        Arc::new(FixedTranscription("irrelevant")),
        Arc::new(MockSummarizationEngine),
    );

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/export/{}", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "application/pdf"
    );

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[tokio::test]
async fn given_unknown_meeting_id_when_exporting_then_returns_not_found() {
    let scratch = tempfile::tempdir().unwrap();
    let reports = tempfile::tempdir().unwrap();
    let app = default_test_app(scratch.path(), reports.path());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/export/999")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = json_body(response).await;
    assert_eq!(json["error"], "Meeting not found");
}

#[tokio::test]
async fn given_request_without_id_when_any_endpoint_then_response_contains_request_id() {
    let scratch = tempfile::tempdir().unwrap();
    let reports = tempfile::tempdir().unwrap();
    let app = default_test_app(scratch.path(), reports.path());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn given_request_with_id_when_any_endpoint_then_response_echoes_request_id() {
    let scratch = tempfile::tempdir().unwrap();
    let reports = tempfile::tempdir().unwrap();
    let app = default_test_app(scratch.path(), reports.path());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .header("x-request-id", "test-request-123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response.headers().get("x-request-id").unwrap(),
        "test-request-123"
    );
}
