use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::{
    AudioChunker, MeetingRepository, ReportRenderer, SummarizationEngine, TranscriptionEngine,
};
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct ProcessMeetingResponse {
    pub meeting_id: i64,
    pub transcript: String,
    pub summary: String,
    pub pdf_link: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn process_meeting_handler<C, T, S, R, P>(
    State(state): State<AppState<C, T, S, R, P>>,
    mut multipart: Multipart,
) -> impl IntoResponse
where
    C: AudioChunker + ?Sized + 'static,
    T: TranscriptionEngine + ?Sized + 'static,
    S: SummarizationEngine + ?Sized + 'static,
    R: MeetingRepository + ?Sized + 'static,
    P: ReportRenderer + ?Sized + 'static,
{
    let field = match multipart.next_field().await {
        Ok(Some(f)) => f,
        Ok(None) => {
            tracing::warn!("Process request with no file");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "No file uploaded".to_string(),
                }),
            )
                .into_response();
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to read multipart");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Failed to read multipart: {}", e),
                }),
            )
                .into_response();
        }
    };

    let filename = field.file_name().unwrap_or("unknown").to_string();

    let data = match field.bytes().await {
        Ok(d) => d,
        Err(e) => {
            tracing::error!(error = %e, "Failed to read file bytes");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Failed to read file: {}", e),
                }),
            )
                .into_response();
        }
    };

    if data.is_empty() {
        tracing::warn!(filename = %filename, "Empty file uploaded");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Uploaded file is empty".to_string(),
            }),
        )
            .into_response();
    }

    if data.len() > state.max_upload_bytes {
        tracing::warn!(filename = %filename, bytes = data.len(), "Upload exceeds size limit");
        return (
            StatusCode::PAYLOAD_TOO_LARGE,
            Json(ErrorResponse {
                error: "Uploaded file exceeds the size limit".to_string(),
            }),
        )
            .into_response();
    }

    tracing::debug!(filename = %filename, bytes = data.len(), "Processing uploaded recording");

    match state.pipeline.process(&data, &filename).await {
        Ok(processed) => (
            StatusCode::OK,
            Json(ProcessMeetingResponse {
                meeting_id: processed.id.as_i64(),
                transcript: processed.transcript,
                summary: processed.summary,
                pdf_link: processed.report_link,
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, filename = %filename, "Meeting processing failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Processing failed: {}", e),
                }),
            )
                .into_response()
        }
    }
}
