//! Router definition

use axum::{
  Router,
  routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers::{health_check, liveness, post_analyze};
use super::state::AppState;
use crate::errors::ApiError;

/// Creates the API router
///
/// # Arguments
/// * `state` - Application state
pub fn create_router(state: AppState) -> Router {
  Router::new()
    .route("/", get(liveness))
    .route("/analyze", post(post_analyze))
    .route("/health", get(health_check))
    .layer(TraceLayer::new_for_http())
    .layer(CorsLayer::permissive())
    .with_state(state)
}

/// Starts the server
///
/// # Errors
/// Returns an error if binding or serving fails
pub async fn run_server(state: AppState) -> crate::errors::Result<()> {
  let addr = state.config.bind_addr.clone();
  let listener = tokio::net::TcpListener::bind(&addr)
    .await
    .map_err(|e| ApiError::config(format!("failed to bind {addr}: {e}")))?;

  tracing::info!("Server listening on http://{}", addr);

  let router = create_router(state);

  axum::serve(listener, router)
    .await
    .map_err(|e| ApiError::internal(format!("server error: {e}")))?;

  Ok(())
}

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use super::*;
  use crate::config::Config;
  use crate::errors::Result as ApiResult;
  use crate::models::{AnalyzeRequest, AnalyzeResponse};
  use crate::service::I3rabApiService;

  /// Stub that never touches a dictionary
  struct DummyService;

  impl I3rabApiService for DummyService {
    fn analyze(&self, _request: AnalyzeRequest) -> ApiResult<AnalyzeResponse> {
      Ok(AnalyzeResponse {
        sentence: String::new(),
        results: Vec::new(),
        elapsed_ms: 0,
      })
    }
  }

  #[test]
  fn router_creation() {
    let service = Arc::new(DummyService) as Arc<dyn I3rabApiService>;
    let _router = create_router(AppState::new(Config::default(), service));
  }
}
