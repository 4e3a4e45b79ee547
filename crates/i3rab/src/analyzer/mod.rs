//! analyzer module

pub mod feature;
pub mod normalize;
pub mod vibrato_analyzer;

use crate::models::Analysis;

/// Re-export
pub use feature::{Morpheme, MorphemeKind, compose_analysis};
pub use normalize::{normalize_word, strip_diacritics};
pub use vibrato_analyzer::VibratoAnalyzer;

/// Morphological analyzer interface
///
/// Given one word, returns its candidate analyses ordered best first, or an empty
/// vector when the word is unknown.
///
/// This trait allows swapping the production implementation (`VibratoAnalyzer`) with
/// test stubs.
pub trait MorphAnalyzer: Send + Sync {
  /// Analyzes a single whitespace-free word
  fn analyze(&self, word: &str) -> Vec<Analysis>;
}
