//! Request model definition

use serde::Deserialize;

/// i3rab analysis request
///
/// A missing `sentence` is accepted here and rejected by the service with the
/// same message as an empty one.
#[derive(Debug, Default, Deserialize)]
pub struct AnalyzeRequest {
  /// Sentence to explain
  #[serde(default)]
  pub sentence: Option<String>,
}

impl AnalyzeRequest {
  /// Request for `sentence`
  #[must_use]
  pub fn new(sentence: impl Into<String>) -> Self {
    Self {
      sentence: Some(sentence.into()),
    }
  }
}
