//! Explanation module
//!
//! Maps the first analysis of a word through an ordered rule table to a canned
//! i3rab sentence.

pub mod category;
pub mod messages;
pub mod resolver;
pub mod rules;

/// Re-export
pub use category::GrammarCategory;
pub use messages::{
  EMPTY_SENTENCE_MESSAGE, NO_ANALYSIS_MESSAGE, UNAVAILABLE_MESSAGE, UNDETERMINED_MESSAGE,
};
pub use resolver::{ExplanationResolver, Resolution, Verdict, explain};
pub use rules::{CANONICAL_RULES, Outcome, Rule};
