use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{
    AudioChunker, MeetingRepository, ReportRenderer, SummarizationEngine, TranscriptionEngine,
};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    export_handler, health_handler, process_meeting_handler, search_handler, summarize_handler,
};
use crate::presentation::state::AppState;

pub fn create_router<C, T, S, R, P>(state: AppState<C, T, S, R, P>) -> Router
where
    C: AudioChunker + ?Sized + 'static,
    T: TranscriptionEngine + ?Sized + 'static,
    S: SummarizationEngine + ?Sized + 'static,
    R: MeetingRepository + ?Sized + 'static,
    P: ReportRenderer + ?Sized + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let max_upload_bytes = state.max_upload_bytes;

    Router::new()
        .route("/health", get(health_handler))
        .route(
            "/process_meeting",
            post(process_meeting_handler::<C, T, S, R, P>),
        )
        .route("/summarize", post(summarize_handler::<C, T, S, R, P>))
        .route("/search", post(search_handler::<C, T, S, R, P>))
        .route("/export/{meeting_id}", get(export_handler::<C, T, S, R, P>))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
