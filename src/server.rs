//! HTTP service: a thin axum shell over the analysis pipeline.
//!
//! Two routes: `POST /parse` runs the full analysis on the request text,
//! `GET /health` reports liveness. Error responses use a fixed JSON shape
//! (`{"error": "..."}`) with 400 for bad input and 500 for analysis
//! failures; internal error details are logged, never sent to clients.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post};
use axum::Router;
use serde::{Deserialize, Serialize};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::annotate::Annotator;
use crate::record::{self, SentenceRecord};

/// Shared server state: the annotation backend serving every request.
#[derive(Clone)]
pub struct AppState {
    /// Annotation backend
    pub annotator: Arc<dyn Annotator>,
}

impl AppState {
    /// Create server state around an annotation backend.
    #[must_use]
    pub fn new(annotator: Arc<dyn Annotator>) -> Self {
        Self { annotator }
    }
}

/// Request body for `POST /parse`.
#[derive(Debug, Deserialize)]
struct ParseRequest {
    #[serde(default)]
    text: Option<String>,
}

/// JSON error body.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// Request-level failures, mapped to HTTP responses.
#[derive(Debug, PartialEq, Eq)]
enum ApiError {
    /// Body was not a JSON object with a string `text` field.
    NoText,
    /// `text` was present but blank.
    EmptyText,
    /// The analysis pipeline failed.
    Internal,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NoText => (StatusCode::BAD_REQUEST, "No text provided"),
            ApiError::EmptyText => (StatusCode::BAD_REQUEST, "Empty text provided"),
            ApiError::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"),
        };
        (
            status,
            Json(ErrorBody {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}

/// `POST /parse`: analyze the request text into per-sentence records.
async fn parse(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Vec<SentenceRecord>>, ApiError> {
    // Any malformed body collapses to the same missing-text response, so a
    // bare string, an array, or invalid JSON all get a 400 rather than
    // leaking serde details.
    let request: ParseRequest = serde_json::from_slice(&body).map_err(|_| ApiError::NoText)?;
    let text = request.text.ok_or(ApiError::NoText)?;
    if text.trim().is_empty() {
        return Err(ApiError::EmptyText);
    }

    let records = record::analyze(state.annotator.as_ref(), &text).map_err(|err| {
        tracing::error!(%err, "analysis failed");
        ApiError::Internal
    })?;
    Ok(Json(records))
}

/// `GET /health`: liveness probe.
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Build the router with CORS restricted to the given origins.
pub fn router(state: AppState, origins: Vec<HeaderValue>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/parse", post(parse))
        .route("/health", get(health))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
