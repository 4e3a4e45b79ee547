//! API error definitions

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use i3rab::errors::{AnalyzerError, I3rabError};
use i3rab::explanation::EMPTY_SENTENCE_MESSAGE;

/// Error kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiErrorKind {
  /// Invalid input
  InvalidInput,
  /// Sentence too long
  TextTooLong,
  /// Internal error
  Internal,
  /// Configuration error
  Config,
}

impl ApiErrorKind {
  /// Machine-readable error code
  #[must_use]
  pub fn code(&self) -> &'static str {
    match self {
      Self::InvalidInput => "invalid_input",
      Self::TextTooLong => "text_too_long",
      Self::Internal => "internal_error",
      Self::Config => "config_error",
    }
  }

  /// HTTP status code
  #[must_use]
  pub fn status(&self) -> StatusCode {
    match self {
      Self::InvalidInput | Self::TextTooLong => StatusCode::BAD_REQUEST,
      Self::Internal | Self::Config => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }
}

/// API error
///
/// Client-facing messages are Arabic; the rest are operator messages.
#[derive(Debug, Error)]
pub enum ApiError {
  /// Invalid input
  #[error("{0}")]
  InvalidInput(String),

  /// Sentence too long
  #[error("الجملة طويلة جدًا: {0} بايت (الحد الأقصى {1} بايت)")]
  TextTooLong(usize, usize),

  /// Internal error
  #[error("internal error: {0}")]
  Internal(String),

  /// Configuration error
  #[error("config error: {0}")]
  Config(String),
}

impl ApiError {
  /// Error kind
  #[must_use]
  pub fn kind(&self) -> ApiErrorKind {
    match self {
      Self::InvalidInput(_) => ApiErrorKind::InvalidInput,
      Self::TextTooLong(_, _) => ApiErrorKind::TextTooLong,
      Self::Internal(_) => ApiErrorKind::Internal,
      Self::Config(_) => ApiErrorKind::Config,
    }
  }

  /// Error code
  #[must_use]
  pub fn code(&self) -> &'static str {
    self.kind().code()
  }

  /// HTTP status code
  #[must_use]
  pub fn status(&self) -> StatusCode {
    self.kind().status()
  }

  /// Creates an invalid input error
  #[must_use]
  pub fn invalid_input(message: impl Into<String>) -> Self {
    Self::InvalidInput(message.into())
  }

  /// The one message shown for any unusable request body
  #[must_use]
  pub fn empty_sentence() -> Self {
    Self::invalid_input(EMPTY_SENTENCE_MESSAGE)
  }

  /// Creates a sentence length error
  #[must_use]
  pub fn text_too_long(actual: usize, max: usize) -> Self {
    Self::TextTooLong(actual, max)
  }

  /// Creates an internal error
  #[must_use]
  pub fn internal(message: impl Into<String>) -> Self {
    Self::Internal(message.into())
  }

  /// Creates a configuration error
  #[must_use]
  pub fn config(message: impl Into<String>) -> Self {
    Self::Config(message.into())
  }
}

/// JSON body of an error response
#[derive(Serialize)]
struct ErrorResponse {
  error: String,
  code: &'static str,
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();
    let body = ErrorResponse {
      error: self.to_string(),
      code: self.code(),
    };

    (status, Json(body)).into_response()
  }
}

/// Maps library errors onto API errors
impl From<I3rabError> for ApiError {
  fn from(err: I3rabError) -> Self {
    match err {
      I3rabError::Analyzer(AnalyzerError::EmptySentence) => ApiError::empty_sentence(),
      I3rabError::Dictionary(_) => ApiError::config(format!("dictionary error: {err}")),
      I3rabError::Config(err) => ApiError::config(err.to_string()),
      // #[non_exhaustive]
      _ => ApiError::internal(format!("unknown error: {err}")),
    }
  }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn invalid_input_creation() {
    let err = ApiError::invalid_input("خطأ");
    assert_eq!(err.kind(), ApiErrorKind::InvalidInput);
    assert_eq!(err.code(), "invalid_input");
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    assert_eq!(err.to_string(), "خطأ");
  }

  #[test]
  fn empty_sentence_uses_fixed_message() {
    let err = ApiError::empty_sentence();
    assert_eq!(err.code(), "invalid_input");
    assert_eq!(err.to_string(), EMPTY_SENTENCE_MESSAGE);
  }

  #[test]
  fn text_too_long_creation() {
    let err = ApiError::text_too_long(100_001, 100_000);
    assert_eq!(err.kind(), ApiErrorKind::TextTooLong);
    assert_eq!(err.code(), "text_too_long");
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    assert!(err.to_string().contains("100001"));
  }

  #[test]
  fn internal_and_config_are_server_errors() {
    assert_eq!(
      ApiError::internal("join").status(),
      StatusCode::INTERNAL_SERVER_ERROR
    );
    assert_eq!(ApiError::internal("join").code(), "internal_error");
    assert_eq!(
      ApiError::config("port").status(),
      StatusCode::INTERNAL_SERVER_ERROR
    );
    assert_eq!(ApiError::config("port").code(), "config_error");
  }

  #[test]
  fn from_empty_sentence() {
    let api_err: ApiError = I3rabError::from(AnalyzerError::EmptySentence).into();
    assert_eq!(api_err.kind(), ApiErrorKind::InvalidInput);
    assert_eq!(api_err.to_string(), EMPTY_SENTENCE_MESSAGE);
  }

  #[test]
  fn from_config_error() {
    use i3rab::errors::ConfigError;
    let err = I3rabError::from(ConfigError::InvalidMaxCandidates {
      min: 1,
      max: 32,
      actual: 0,
    });
    let api_err: ApiError = err.into();
    assert_eq!(api_err.kind(), ApiErrorKind::Config);
  }

  #[test]
  fn from_dictionary_error() {
    use i3rab::errors::DictionaryError;
    let err = I3rabError::from(DictionaryError::DictionaryNotFound("/x".to_string()));
    let api_err: ApiError = err.into();
    assert_eq!(api_err.kind(), ApiErrorKind::Config);
    assert!(api_err.to_string().contains("/x"));
  }

  #[test]
  fn response_body_shape() {
    let response = ApiError::empty_sentence().into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
  }
}
