//! Explanation resolver
//!
//! `explain(word, analyses)` picks the first analysis as authoritative and walks the
//! rule table in order. There is no scoring or disambiguation across candidates.

use tracing::debug;

use crate::models::Analysis;

use super::category::GrammarCategory;
use super::messages::{NO_ANALYSIS_MESSAGE, UNAVAILABLE_MESSAGE, UNDETERMINED_MESSAGE};
use super::rules::{CANONICAL_RULES, Outcome, Rule};

/// Final verdict for one word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
  /// A rule resolved to a grammar category
  Category(GrammarCategory),
  /// Noun without a recognized case mark
  Undetermined,
  /// The analyzer returned nothing
  NoAnalysis,
  /// No rule matched
  Unavailable,
}

impl Verdict {
  /// Explanation text of the verdict
  pub fn text(&self) -> &'static str {
    match self {
      Self::Category(category) => category.explanation(),
      Self::Undetermined => UNDETERMINED_MESSAGE,
      Self::NoAnalysis => NO_ANALYSIS_MESSAGE,
      Self::Unavailable => UNAVAILABLE_MESSAGE,
    }
  }
}

impl From<Outcome> for Verdict {
  fn from(outcome: Outcome) -> Self {
    match outcome {
      Outcome::Category(category) => Self::Category(category),
      Outcome::Undetermined => Self::Undetermined,
    }
  }
}

/// Verdict plus the id of the rule that produced it (`None` for the fixed messages)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
  /// Verdict
  pub verdict: Verdict,
  /// Matching rule id
  pub rule: Option<&'static str>,
}

impl Resolution {
  /// Explanation text
  pub fn text(&self) -> &'static str {
    self.verdict.text()
  }
}

/// Resolver over an ordered rule table
///
/// - Stateless; `resolve` is a pure function of its input
/// - `Copy`, so it can be embedded in any service without sharing
#[derive(Debug, Clone, Copy)]
pub struct ExplanationResolver {
  rules: &'static [Rule],
}

impl Default for ExplanationResolver {
  fn default() -> Self {
    Self::new(&CANONICAL_RULES)
  }
}

impl ExplanationResolver {
  /// Creates a resolver over a custom rule table
  pub const fn new(rules: &'static [Rule]) -> Self {
    Self { rules }
  }

  /// Rule table in evaluation order
  pub fn rules(&self) -> &'static [Rule] {
    self.rules
  }

  /// Resolves the verdict for a list of candidate analyses
  pub fn resolve(&self, analyses: &[Analysis]) -> Resolution {
    let Some(analysis) = analyses.first() else {
      return Resolution {
        verdict: Verdict::NoAnalysis,
        rule: None,
      };
    };

    self
      .rules
      .iter()
      .find(|rule| rule.applies(analysis))
      .map_or(
        Resolution {
          verdict: Verdict::Unavailable,
          rule: None,
        },
        |rule| Resolution {
          verdict: rule.outcome.into(),
          rule: Some(rule.id),
        },
      )
  }

  /// Returns the explanation sentence for `word`
  pub fn explain(&self, word: &str, analyses: &[Analysis]) -> &'static str {
    let resolution = self.resolve(analyses);
    debug!(
      word = %word,
      candidates = analyses.len(),
      rule = resolution.rule.unwrap_or("-"),
      "Resolved explanation"
    );
    resolution.text()
  }
}

/// Explains `word` with the canonical rule table
pub fn explain(word: &str, analyses: &[Analysis]) -> &'static str {
  ExplanationResolver::default().explain(word, analyses)
}
