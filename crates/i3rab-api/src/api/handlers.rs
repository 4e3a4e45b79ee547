//! HTTP handler definitions

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use tracing::{debug, error, info};

use crate::errors::ApiError;
use crate::models::{AnalyzeRequest, AnalyzeResponse};

use super::state::AppState;

/// Text returned by `GET /`
pub const LIVENESS_MESSAGE: &str = "i3rab API is running";

/// POST /analyze endpoint
///
/// Explains the grammatical role of every word of an Arabic sentence.
///
/// # Request Body
/// ```json
/// { "sentence": "كتب الولد" }
/// ```
///
/// # Response
/// - 200 OK: one result per word
/// - 400 Bad Request: missing/empty sentence, malformed body, sentence too long
/// - 500 Internal Server Error: internal error
pub async fn post_analyze(
  State(state): State<AppState>,
  payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
  let Json(request) = payload.map_err(|rejection| {
    debug!(reason = %rejection.body_text(), "Rejected request body");
    ApiError::empty_sentence()
  })?;

  debug!(
    text_len = request.sentence.as_ref().map_or(0, String::len),
    "Analysis request received"
  );

  // Analysis is CPU-bound, keep it off the async runtime
  let service = state.service.clone();

  let response =
    tokio::task::spawn_blocking(move || service.analyze(request)).await.map_err(|e| {
      error!(error = %e, "spawn_blocking failed");
      ApiError::internal("failed to run analysis task")
    })??;

  info!(
    word_count = response.results.len(),
    elapsed_ms = response.elapsed_ms,
    "Analysis completed"
  );

  Ok(Json(response))
}

/// GET / endpoint
pub async fn liveness() -> &'static str {
  LIVENESS_MESSAGE
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
  "OK"
}
