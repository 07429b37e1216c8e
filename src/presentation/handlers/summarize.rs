use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::ports::{
    AudioChunker, MeetingRepository, ReportRenderer, SummarizationEngine, TranscriptionEngine,
};
use crate::infrastructure::observability::preview_text;
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct SummarizeRequest {
    pub transcript: String,
}

#[derive(Serialize)]
pub struct SummarizeResponse {
    pub summary: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Summarizes without persisting. Engine failure is not a fault here: the
/// degrade policy substitutes a fixed message and the request succeeds.
#[tracing::instrument(skip(state, request))]
pub async fn summarize_handler<C, T, S, R, P>(
    State(state): State<AppState<C, T, S, R, P>>,
    Json(request): Json<SummarizeRequest>,
) -> impl IntoResponse
where
    C: AudioChunker + ?Sized + 'static,
    T: TranscriptionEngine + ?Sized + 'static,
    S: SummarizationEngine + ?Sized + 'static,
    R: MeetingRepository + ?Sized + 'static,
    P: ReportRenderer + ?Sized + 'static,
{
    if request.transcript.trim().is_empty() {
        tracing::warn!("Summarize request with empty transcript");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Transcript must not be empty".to_string(),
            }),
        )
            .into_response();
    }

    tracing::debug!(transcript = %preview_text(&request.transcript), "Summarizing transcript");

    let structured = state.pipeline.summarize(&request.transcript).await;

    (
        StatusCode::OK,
        Json(SummarizeResponse {
            summary: structured.summary,
        }),
    )
        .into_response()
}
