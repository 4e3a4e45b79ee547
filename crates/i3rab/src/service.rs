// crates/i3rab/src/service.rs

//! I3rabService: facade of the i3rab crate.
//!
//! - Morphological analyzer (`MorphAnalyzer`), injected or built from the dictionary
//! - Explanation resolver (`ExplanationResolver`)
//!
//! HTTP handlers and other callers only need this struct.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, info};

use crate::analyzer::{MorphAnalyzer, VibratoAnalyzer};
use crate::config::I3rabConfig;
use crate::dictionary::DictionaryManager;
use crate::errors::error_definition::{AnalyzerError, I3rabResult};
use crate::explanation::ExplanationResolver;
use crate::models::{AnalysisResult, SentenceAnalysis};

/// Facade of the i3rab crate.
///
/// The analyzer is an explicitly constructed instance passed in at construction time;
/// there is no process-wide singleton.
pub struct I3rabService {
  /// Morphological analyzer
  analyzer: Arc<dyn MorphAnalyzer>,

  /// Rule table walker
  resolver: ExplanationResolver,

  /// Dictionary manager (only when built through `init`)
  dictionary_manager: Option<DictionaryManager>,
}

impl I3rabService {
  /// Wraps an existing analyzer with the canonical rule table
  pub fn new(analyzer: Arc<dyn MorphAnalyzer>) -> Self {
    Self {
      analyzer,
      resolver: ExplanationResolver::default(),
      dictionary_manager: None,
    }
  }

  /// Replaces the resolver
  #[must_use]
  pub fn with_resolver(mut self, resolver: ExplanationResolver) -> Self {
    self.resolver = resolver;
    self
  }

  /// Initialization (config validation + dictionary load + analyzer construction)
  ///
  /// # Errors
  /// - Invalid configuration
  /// - Dictionary build / load failure
  pub fn init(config: &I3rabConfig) -> I3rabResult<Self> {
    // ConfigError is converted to I3rabError by #[from]
    config.validate()?;

    let manager = DictionaryManager::from_source(config.dictionary_source())?;
    let dict = manager.load()?;
    let analyzer = VibratoAnalyzer::from_shared_dictionary(dict, config.max_candidates());

    info!(
      source = ?manager.source(),
      max_candidates = config.max_candidates(),
      "I3rabService initialized"
    );

    Ok(Self {
      analyzer: Arc::new(analyzer),
      resolver: ExplanationResolver::default(),
      dictionary_manager: Some(manager),
    })
  }

  /// Returns the dictionary manager, if the service owns one
  pub fn dictionary_manager(&self) -> Option<&DictionaryManager> {
    self.dictionary_manager.as_ref()
  }

  /// Analyzes and explains a single word
  ///
  /// A word the analyzer does not know is not an error: it gets the fixed
  /// "no analysis found" explanation.
  pub fn analyze_word(&self, word: &str, include_analyses: bool) -> AnalysisResult {
    let analyses = self.analyzer.analyze(word);
    let resolution = self.resolver.resolve(&analyses);

    debug!(
      word = %word,
      candidates = analyses.len(),
      rule = resolution.rule.unwrap_or("-"),
      "Word explained"
    );

    AnalysisResult {
      word: word.to_string(),
      explanation: resolution.text().to_string(),
      rule: resolution.rule.map(str::to_string),
      analyses: include_analyses.then_some(analyses),
    }
  }

  /// Splits the sentence on whitespace and explains every word in order
  ///
  /// # Errors
  /// `AnalyzerError::EmptySentence` if the sentence is empty or whitespace-only
  pub fn analyze_sentence(
    &self,
    sentence: &str,
    include_analyses: bool,
  ) -> I3rabResult<SentenceAnalysis> {
    let sentence = sentence.trim();
    if sentence.is_empty() {
      return Err(AnalyzerError::EmptySentence.into());
    }

    let results: Vec<AnalysisResult> = sentence
      .split_whitespace()
      .map(|word| self.analyze_word(word, include_analyses))
      .collect();

    Ok(SentenceAnalysis {
      sentence: sentence.to_string(),
      results,
    })
  }
}

impl fmt::Debug for I3rabService {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("I3rabService")
      .field("resolver", &self.resolver)
      .field("dictionary_manager", &self.dictionary_manager)
      .finish_non_exhaustive()
  }
}
