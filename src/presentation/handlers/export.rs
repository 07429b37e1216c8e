use axum::Json;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::{
    AudioChunker, MeetingRepository, ReportRenderer, SummarizationEngine, TranscriptionEngine,
    report_file_name,
};
use crate::domain::MeetingId;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Re-renders the report from the stored record on every request; the
/// document on disk is a cache, never the source of truth.
#[tracing::instrument(skip(state))]
pub async fn export_handler<C, T, S, R, P>(
    State(state): State<AppState<C, T, S, R, P>>,
    Path(meeting_id): Path<i64>,
) -> impl IntoResponse
where
    C: AudioChunker + ?Sized + 'static,
    T: TranscriptionEngine + ?Sized + 'static,
    S: SummarizationEngine + ?Sized + 'static,
    R: MeetingRepository + ?Sized + 'static,
    P: ReportRenderer + ?Sized + 'static,
{
    let id = MeetingId::from_i64(meeting_id);

    let record = match state.repository.get_by_id(id).await {
        Ok(Some(record)) => record,
        Ok(None) => {
            tracing::warn!(meeting_id = %id, "Export requested for unknown meeting");
            return (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: "Meeting not found".to_string(),
                }),
            )
                .into_response();
        }
        Err(e) => {
            tracing::error!(error = %e, meeting_id = %id, "Export lookup failed");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Export failed: {}", e),
                }),
            )
                .into_response();
        }
    };

    match state.renderer.render(&record) {
        Ok(document) => {
            tracing::info!(meeting_id = %id, bytes = document.len(), "Report exported");
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "application/pdf".to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{}\"", report_file_name(id)),
                    ),
                ],
                document,
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, meeting_id = %id, "Report rendering failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Export failed: {}", e),
                }),
            )
                .into_response()
        }
    }
}
