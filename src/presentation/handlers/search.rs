use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::ports::{
    AudioChunker, MeetingRepository, ReportRenderer, SummarizationEngine, TranscriptionEngine,
};
use crate::infrastructure::observability::preview_text;
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct SearchRequest {
    pub query: String,
}

#[derive(Serialize)]
pub struct SearchResponse {
    pub results: Vec<MeetingResult>,
}

#[derive(Serialize)]
pub struct MeetingResult {
    pub id: i64,
    pub transcript: String,
    pub summary: String,
    pub action_items: String,
    pub decisions: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Substring search over stored transcripts. Zero matches is an empty
/// success, not a fault.
#[tracing::instrument(skip(state, request))]
pub async fn search_handler<C, T, S, R, P>(
    State(state): State<AppState<C, T, S, R, P>>,
    Json(request): Json<SearchRequest>,
) -> impl IntoResponse
where
    C: AudioChunker + ?Sized + 'static,
    T: TranscriptionEngine + ?Sized + 'static,
    S: SummarizationEngine + ?Sized + 'static,
    R: MeetingRepository + ?Sized + 'static,
    P: ReportRenderer + ?Sized + 'static,
{
    tracing::debug!(query = %preview_text(&request.query), "Searching transcripts");

    match state.repository.search(&request.query).await {
        Ok(records) => {
            tracing::info!(matches = records.len(), "Search completed");
            let results = records
                .into_iter()
                .map(|r| MeetingResult {
                    id: r.id.as_i64(),
                    transcript: r.transcript,
                    summary: r.summary,
                    action_items: r.action_items,
                    decisions: r.decisions,
                    created_at: r.created_at,
                })
                .collect();

            (StatusCode::OK, Json(SearchResponse { results })).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Search failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Search failed: {}", e),
                }),
            )
                .into_response()
        }
    }
}
