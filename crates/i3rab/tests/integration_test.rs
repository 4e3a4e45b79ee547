//! crates/i3rab/tests/integration_test.rs
//!
//! End-to-end integration test.
//! Verifies the entire flow: Build bundled dictionary -> Build analyzer ->
//! Analyze sentence -> Resolve explanations.

use i3rab::config::I3rabConfig;
use i3rab::explanation::{
  GrammarCategory, NO_ANALYSIS_MESSAGE, UNAVAILABLE_MESSAGE, UNDETERMINED_MESSAGE,
};
use i3rab::service::I3rabService;

fn service() -> I3rabService {
  I3rabService::init(&I3rabConfig::default()).expect("bundled dictionary should build")
}

/// Explanation of a single word
fn explanation_of(service: &I3rabService, word: &str) -> String {
  service.analyze_word(word, false).explanation
}

#[test]
fn two_word_sentence_yields_two_results() {
  let analysis = service().analyze_sentence("كتب الولد", true).unwrap();

  assert_eq!(analysis.results.len(), 2);
  for result in &analysis.results {
    assert!(!result.word.is_empty());
    assert!(!result.explanation.is_empty());
    assert!(result.analyses.as_ref().is_some_and(|a| !a.is_empty()));
  }

  assert_eq!(
    analysis.results[0].explanation,
    GrammarCategory::PastOnFatha.explanation()
  );
  assert_eq!(
    analysis.results[1].explanation,
    GrammarCategory::Subject.explanation()
  );
}

#[test]
fn verb_forms() {
  let service = service();
  assert_eq!(
    explanation_of(&service, "كتبت"),
    GrammarCategory::PastAttachedTa.explanation()
  );
  assert_eq!(
    explanation_of(&service, "يكتب"),
    GrammarCategory::Present.explanation()
  );
  assert_eq!(
    explanation_of(&service, "سيذهب"),
    GrammarCategory::Present.explanation()
  );
}

#[test]
fn function_words() {
  let service = service();
  assert_eq!(
    explanation_of(&service, "في"),
    GrammarCategory::Preposition.explanation()
  );
  assert_eq!(
    explanation_of(&service, "هو"),
    GrammarCategory::AttachedPronoun.explanation()
  );
  assert_eq!(
    explanation_of(&service, "هذا"),
    GrammarCategory::Demonstrative.explanation()
  );
}

#[test]
fn noun_with_possessive_enclitic() {
  assert_eq!(
    explanation_of(&service(), "كتابه"),
    GrammarCategory::AttachedPronoun.explanation()
  );
}

#[test]
fn noun_without_case_mark() {
  assert_eq!(
    explanation_of(&service(), "المستشفى"),
    UNDETERMINED_MESSAGE
  );
}

#[test]
fn noun_after_prepositional_proclitic_is_genitive() {
  let result = service().analyze_word("بالقلم", false);
  assert_eq!(result.rule.as_deref(), Some("noun_genitive"));
  assert_eq!(result.explanation, GrammarCategory::Genitive.explanation());
}

#[test]
fn typed_case_mark_selects_the_case() {
  let service = service();
  assert_eq!(
    explanation_of(&service, "الولدَ"),
    GrammarCategory::Object.explanation()
  );
  assert_eq!(
    explanation_of(&service, "المدرسةِ"),
    GrammarCategory::Genitive.explanation()
  );
  // no marks typed: the nominative reading stays first
  assert_eq!(
    explanation_of(&service, "المدرسة"),
    GrammarCategory::Subject.explanation()
  );
}

#[test]
fn sentence_with_object_and_prepositional_phrase() {
  let analysis = service().analyze_sentence("كتب الولدُ الدرسَ بالقلم", false).unwrap();
  let rules: Vec<_> = analysis.results.iter().map(|r| r.rule.as_deref()).collect();
  assert_eq!(
    rules,
    [
      Some("verb_past"),
      Some("noun_nominative"),
      Some("noun_accusative"),
      Some("noun_genitive")
    ]
  );
}

#[test]
fn adjective_has_no_rule() {
  assert_eq!(explanation_of(&service(), "كبير"), UNAVAILABLE_MESSAGE);
}

#[test]
fn unknown_word_has_no_analysis() {
  let result = service().analyze_word("qwerty", true);
  assert_eq!(result.explanation, NO_ANALYSIS_MESSAGE);
  assert_eq!(result.analyses, Some(Vec::new()));
}

#[test]
fn punctuation_and_diacritics_do_not_hide_words() {
  let analysis = service().analyze_sentence("كَتَبَ الوَلَدُ.", false).unwrap();
  assert_eq!(analysis.results[1].word, "الوَلَدُ.");
  assert_eq!(
    analysis.results[1].explanation,
    GrammarCategory::Subject.explanation()
  );
}

#[test]
fn repeated_calls_are_identical() {
  let service = service();
  let first = service.analyze_sentence("ذهب الطالب إلى المدرسة", true).unwrap();
  let second = service.analyze_sentence("ذهب الطالب إلى المدرسة", true).unwrap();
  assert_eq!(first, second);
}
