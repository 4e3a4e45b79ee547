//! Morphological analyzer using vibrato-rkyv

use std::sync::Arc;

use tracing::debug;
use vibrato_rkyv::Dictionary;
use vibrato_rkyv::Tokenizer as VibratoImpl;

use crate::models::Analysis;

use super::MorphAnalyzer;
use super::feature::{Morpheme, compose_analysis};
use super::normalize::{
  diacritics_agree, has_diacritics, normalize_word, trim_edge_punctuation,
};

/// Arabic morphological analyzer over a vibrato-rkyv dictionary
///
/// - Stateless (only holds the shared dictionary)
/// - `Clone + Send + Sync`
/// - Each N-best lattice path is one candidate analysis
#[derive(Clone)]
pub struct VibratoAnalyzer {
  inner: VibratoImpl,
  max_candidates: usize,
}

impl VibratoAnalyzer {
  /// Constructs an analyzer from a shared dictionary (`Arc<Dictionary>`).
  ///
  /// Use this with `DictionaryManager::load()`.
  ///
  /// # Examples
  /// ```rust,no_run
  /// # use i3rab::dictionary::DictionaryManager;
  /// # use i3rab::analyzer::{MorphAnalyzer, VibratoAnalyzer};
  /// let manager = DictionaryManager::bundled();
  /// let dict = manager.load().unwrap();
  /// let analyzer = VibratoAnalyzer::from_shared_dictionary(dict, 5);
  /// let analyses = analyzer.analyze("الولد");
  /// ```
  pub fn from_shared_dictionary(dict: Arc<Dictionary>, max_candidates: usize) -> Self {
    Self {
      inner: VibratoImpl::from_shared_dictionary(dict),
      max_candidates: max_candidates.max(1),
    }
  }

  /// N-best width
  pub fn max_candidates(&self) -> usize {
    self.max_candidates
  }
}

impl MorphAnalyzer for VibratoAnalyzer {
  fn analyze(&self, word: &str) -> Vec<Analysis> {
    let normalized = normalize_word(word);
    if normalized.is_empty() {
      return Vec::new();
    }

    // worker holds the lattice; created per call so the analyzer stays shareable
    let mut worker = self.inner.new_worker();
    worker.reset_sentence(&normalized);
    worker.tokenize_nbest(self.max_candidates);

    let mut analyses: Vec<Analysis> = Vec::with_capacity(worker.num_nbest_paths());

    for path_idx in 0..worker.num_nbest_paths() {
      let Some(tokens) = worker.nbest_token_iter(path_idx) else {
        continue;
      };
      let morphemes: Vec<Morpheme> =
        tokens.map(|token| Morpheme::from_feature(token.surface(), token.feature())).collect();

      match compose_analysis(&morphemes) {
        Some(analysis) if !analyses.contains(&analysis) => analyses.push(analysis),
        Some(_) => {}
        None => {
          debug!(
            word = %word,
            path_idx,
            cost = ?worker.path_cost(path_idx),
            "Skipped path with unknown or incomplete morphemes"
          );
        }
      }
    }

    // candidates contradicting marks the user typed go last
    let written = trim_edge_punctuation(word);
    if has_diacritics(written) {
      analyses.sort_by_key(|analysis| !diacritics_agree(written, &analysis.diac));
    }

    debug!(
      word = %word,
      normalized = %normalized,
      paths = worker.num_nbest_paths(),
      candidates = analyses.len(),
      "Morphological analysis completed"
    );

    analyses
  }
}
