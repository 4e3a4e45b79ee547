//! Response model definition

use serde::Serialize;

use i3rab::AnalysisResult;

/// i3rab analysis response
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
  /// Trimmed input sentence
  pub sentence: String,
  /// One entry per whitespace-separated word, in input order
  pub results: Vec<AnalysisResult>,
  /// Elapsed time (milliseconds)
  pub elapsed_ms: u64,
}
