//! HTTP surface over the searcher

use crate::books::ALL_BOOKS;
use crate::error::SearchError;
use crate::search::{SearchResults, Searcher, VerseText};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

pub struct AppState {
    pub searcher: Searcher,
}

impl AppState {
    pub fn new(searcher: Searcher) -> Self {
        Self { searcher }
    }
}

// === Request/Response types ===

#[derive(Deserialize)]
struct SearchQuery {
    q: String,
}

#[derive(Deserialize)]
struct VerseQuery {
    book: String,
    chapter: usize,
    verse: usize,
}

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    books: usize,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn error_response(err: SearchError) -> ApiError {
    let status = match err {
        SearchError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
        SearchError::NotFound(_) => StatusCode::NOT_FOUND,
        SearchError::CorpusUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    if status.is_server_error() {
        tracing::error!(error = %err, "request failed");
    }
    (status, Json(ErrorResponse { error: err.to_string() }))
}

// === Handlers ===

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok".to_string(), books: ALL_BOOKS.len() })
}

async fn books() -> Json<Vec<&'static str>> {
    Json(ALL_BOOKS.to_vec())
}

async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<SearchResults>, ApiError> {
    // an empty pattern matches every verse
    if params.q.trim().is_empty() {
        let error = ErrorResponse { error: "Empty query".to_string() };
        return Err((StatusCode::BAD_REQUEST, Json(error)));
    }

    state.searcher.search_timed(&params.q)
        .map(Json)
        .map_err(error_response)
}

async fn verse(
    State(state): State<Arc<AppState>>,
    Query(params): Query<VerseQuery>,
) -> Result<Json<VerseText>, ApiError> {
    state.searcher.verse(&params.book, params.chapter, params.verse)
        .map(Json)
        .map_err(error_response)
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/books", get(books))
        .route("/search", get(search))
        .route("/verse", get(verse))
        .layer(cors)
        .with_state(state)
}
