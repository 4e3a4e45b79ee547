//! i3rab analysis service

use std::time::Instant;

use i3rab::I3rabService;

use crate::config::{Config, MAX_TEXT_LENGTH};
use crate::errors::{ApiError, Result};
use crate::models::{AnalyzeRequest, AnalyzeResponse};

/// Common interface for the analysis service
///
/// This trait allows swapping the production implementation (`I3rabApiServiceFull`)
/// with test stubs.
pub trait I3rabApiService: Send + Sync {
  /// Explains every word of the request sentence
  ///
  /// # Errors
  /// - Input error (missing/empty sentence, length exceeded)
  /// - Internal error
  fn analyze(&self, request: AnalyzeRequest) -> Result<AnalyzeResponse>;
}

/// Analysis service backed by the i3rab library
///
/// The analyzer and dictionary are built once here and shared by every request.
#[derive(Debug)]
pub struct I3rabApiServiceFull {
  core: I3rabService,
  include_analyses: bool,
}

impl I3rabApiServiceFull {
  /// Initializes the service
  ///
  /// # Arguments
  /// * `config` - Configuration (dictionary source, n-best width)
  ///
  /// # Errors
  /// Returns an error if the configuration is invalid or the dictionary fails to load
  pub fn new(config: &Config) -> Result<Self> {
    let core = I3rabService::init(&config.to_core_config())?;
    Ok(Self::from_service(core, config.include_analyses))
  }

  /// Wraps an already built library service
  #[must_use]
  pub fn from_service(core: I3rabService, include_analyses: bool) -> Self {
    Self {
      core,
      include_analyses,
    }
  }

  /// Explains every word of the request sentence
  ///
  /// # Errors
  /// - If the sentence is missing, empty or whitespace-only
  /// - If the sentence exceeds `MAX_TEXT_LENGTH` bytes
  pub fn analyze(&self, request: AnalyzeRequest) -> Result<AnalyzeResponse> {
    let sentence = request.sentence.unwrap_or_default();

    let text_bytes = sentence.len();
    if text_bytes > MAX_TEXT_LENGTH {
      return Err(ApiError::text_too_long(text_bytes, MAX_TEXT_LENGTH));
    }

    let start = Instant::now();

    // EmptySentence maps to the invalid_input message
    let analysis = self.core.analyze_sentence(&sentence, self.include_analyses)?;

    let elapsed_ms = start.elapsed().as_millis() as u64;

    Ok(AnalyzeResponse {
      sentence: analysis.sentence,
      results: analysis.results,
      elapsed_ms,
    })
  }
}

/// Production implementation of trait `I3rabApiService`
impl I3rabApiService for I3rabApiServiceFull {
  fn analyze(&self, request: AnalyzeRequest) -> Result<AnalyzeResponse> {
    // Explicitly call the inherent method; `self.analyze` would recurse.
    I3rabApiServiceFull::analyze(self, request)
  }
}
