//! Ordered rule table
//!
//! Rules are evaluated top to bottom against the authoritative analysis and the first
//! match wins. Later rules may assume earlier ones did not match, e.g. every verb that
//! reaches `verb_past` has already failed the attached-ta and present checks.

use crate::analyzer::normalize::strip_diacritics;
use crate::models::{Analysis, Aspect, CliticSlot, PartOfSpeech};

use super::category::GrammarCategory;

/// Damma (U+064F): nominative mark
pub const DAMMA: char = '\u{064F}';
/// Fatha (U+064E): accusative mark
pub const FATHA: char = '\u{064E}';
/// Kasra (U+0650): genitive mark
pub const KASRA: char = '\u{0650}';

/// Subject ta closing a past verb
const TA: char = 'ت';
/// Imperfective prefix ya
const YA: char = 'ي';

/// Result of a matching rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
  /// Resolves to a grammar category
  Category(GrammarCategory),
  /// Noun without a recognizable case mark
  Undetermined,
}

/// One (predicate, result) entry of the table
#[derive(Debug, Clone, Copy)]
pub struct Rule {
  /// Stable identifier reported alongside the explanation
  pub id: &'static str,
  /// Predicate over the authoritative analysis
  pub matches: fn(&Analysis) -> bool,
  /// What a match resolves to
  pub outcome: Outcome,
}

impl Rule {
  /// Creates a rule
  pub const fn new(id: &'static str, matches: fn(&Analysis) -> bool, outcome: Outcome) -> Self {
    Self { id, matches, outcome }
  }

  /// Whether the rule applies to the analysis
  pub fn applies(&self, analysis: &Analysis) -> bool {
    (self.matches)(analysis)
  }
}

/// Canonical rule table
pub static CANONICAL_RULES: [Rule; 11] = [
  Rule::new(
    "verb_past_attached_ta",
    verb_past_attached_ta,
    Outcome::Category(GrammarCategory::PastAttachedTa),
  ),
  Rule::new(
    "verb_present",
    verb_present,
    Outcome::Category(GrammarCategory::Present),
  ),
  Rule::new(
    "verb_past",
    verb_past,
    Outcome::Category(GrammarCategory::PastOnFatha),
  ),
  Rule::new(
    "preposition",
    preposition,
    Outcome::Category(GrammarCategory::Preposition),
  ),
  Rule::new(
    "attached_pronoun",
    attached_pronoun,
    Outcome::Category(GrammarCategory::AttachedPronoun),
  ),
  Rule::new(
    "noun_nominative",
    noun_nominative,
    Outcome::Category(GrammarCategory::Subject),
  ),
  Rule::new(
    "noun_accusative",
    noun_accusative,
    Outcome::Category(GrammarCategory::Object),
  ),
  Rule::new(
    "noun_genitive",
    noun_genitive,
    Outcome::Category(GrammarCategory::Genitive),
  ),
  Rule::new("noun_undetermined", noun, Outcome::Undetermined),
  Rule::new(
    "pronoun",
    pronoun,
    Outcome::Category(GrammarCategory::AttachedPronoun),
  ),
  Rule::new(
    "demonstrative",
    demonstrative,
    Outcome::Category(GrammarCategory::Demonstrative),
  ),
];

// ─── Predicates ───

fn is_verb(analysis: &Analysis) -> bool {
  analysis.pos == PartOfSpeech::Verb
}

/// Lexeme letters without short vowels
fn bare_lex(analysis: &Analysis) -> String {
  strip_diacritics(&analysis.lex)
}

fn verb_past_attached_ta(analysis: &Analysis) -> bool {
  is_verb(analysis) && bare_lex(analysis).ends_with(TA)
}

fn verb_present(analysis: &Analysis) -> bool {
  is_verb(analysis)
    && (bare_lex(analysis).starts_with(YA) || analysis.aspect == Some(Aspect::Imperfective))
}

fn verb_past(analysis: &Analysis) -> bool {
  is_verb(analysis) && analysis.aspect == Some(Aspect::Perfective)
}

fn preposition(analysis: &Analysis) -> bool {
  analysis.pos == PartOfSpeech::Prep
}

fn attached_pronoun(analysis: &Analysis) -> bool {
  analysis.has_feature(CliticSlot::Enc0.key())
}

fn noun(analysis: &Analysis) -> bool {
  analysis.pos == PartOfSpeech::Noun
}

fn noun_ending_with(analysis: &Analysis, mark: char) -> bool {
  noun(analysis) && analysis.diac.ends_with(mark)
}

fn noun_nominative(analysis: &Analysis) -> bool {
  noun_ending_with(analysis, DAMMA)
}

fn noun_accusative(analysis: &Analysis) -> bool {
  noun_ending_with(analysis, FATHA)
}

fn noun_genitive(analysis: &Analysis) -> bool {
  noun_ending_with(analysis, KASRA)
}

fn pronoun(analysis: &Analysis) -> bool {
  analysis.pos == PartOfSpeech::Pron
}

fn demonstrative(analysis: &Analysis) -> bool {
  analysis.pos == PartOfSpeech::PronDem
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashSet;

  fn rule(id: &str) -> &'static Rule {
    CANONICAL_RULES.iter().find(|r| r.id == id).expect("rule exists")
  }

  #[test]
  fn rule_ids_are_unique() {
    let ids: HashSet<_> = CANONICAL_RULES.iter().map(|r| r.id).collect();
    assert_eq!(ids.len(), CANONICAL_RULES.len());
  }

  #[test]
  fn attached_ta_ignores_lexeme_diacritics() {
    let analysis = Analysis::new(PartOfSpeech::Verb, "كَتَبْت", "كَتَبْتُ");
    assert!(rule("verb_past_attached_ta").applies(&analysis));
  }

  #[test]
  fn present_matches_ya_prefix_without_aspect() {
    let analysis = Analysis::new(PartOfSpeech::Verb, "يَئِس", "يَئِسَ");
    assert!(rule("verb_present").applies(&analysis));
  }

  #[test]
  fn present_matches_imperfective_aspect() {
    let analysis =
      Analysis::new(PartOfSpeech::Verb, "كَتَب", "تَكْتُبُ").with_aspect(Aspect::Imperfective);
    assert!(rule("verb_present").applies(&analysis));
    assert!(!rule("verb_past").applies(&analysis));
  }

  #[test]
  fn verb_rules_reject_nouns() {
    let analysis = Analysis::new(PartOfSpeech::Noun, "بَيْت", "بَيْتُ");
    assert!(!rule("verb_past_attached_ta").applies(&analysis));
    assert!(!rule("verb_present").applies(&analysis));
  }

  #[test]
  fn noun_case_predicates_look_at_last_mark_only() {
    let tanween = Analysis::new(PartOfSpeech::Noun, "وَلَد", "وَلَدٌ");
    assert!(!rule("noun_nominative").applies(&tanween));
    assert!(rule("noun_undetermined").applies(&tanween));

    let kasra = Analysis::new(PartOfSpeech::Noun, "وَلَد", "وَلَدِ");
    assert!(rule("noun_genitive").applies(&kasra));
    assert!(!rule("noun_accusative").applies(&kasra));
  }

  #[test]
  fn attached_pronoun_requires_enclitic_feature() {
    let bare = Analysis::new(PartOfSpeech::Noun, "كِتاب", "كِتابُ");
    assert!(!rule("attached_pronoun").applies(&bare));

    let with_enclitic = bare.with_clitic(CliticSlot::Enc0, "3ms_poss");
    assert!(rule("attached_pronoun").applies(&with_enclitic));
  }
}
