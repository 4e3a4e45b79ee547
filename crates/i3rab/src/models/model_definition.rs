//! Data Model Definition
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Auxiliary morphological features of an analysis
///
/// key: feature name (`bw`, `gloss`, clitic slots such as `prc0` / `enc0`)
/// value: feature value
///
/// A `BTreeMap` keeps the JSON output in a stable key order.
pub type Features = BTreeMap<String, String>;

/// Feature key holding the Buckwalter-style tag chain
pub const BW_FEATURE: &str = "bw";

/// Feature key holding the English gloss of the stem
pub const GLOSS_FEATURE: &str = "gloss";

/// Part-of-speech tag of an analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartOfSpeech {
  /// Verb
  Verb,
  /// Common noun
  Noun,
  /// Proper noun
  NounProp,
  /// Adjective
  Adj,
  /// Preposition
  Prep,
  /// Personal pronoun
  Pron,
  /// Demonstrative pronoun
  PronDem,
  /// Conjunction
  Conj,
  /// Particle
  Part,
  /// Adverb
  Adv,
  /// Any tag the analyzer emitted that is not listed above
  Unknown,
}

impl PartOfSpeech {
  /// Returns the analyzer tag (`"verb"`, `"noun"`, ...)
  pub fn tag(&self) -> &'static str {
    match self {
      Self::Verb => "verb",
      Self::Noun => "noun",
      Self::NounProp => "noun_prop",
      Self::Adj => "adj",
      Self::Prep => "prep",
      Self::Pron => "pron",
      Self::PronDem => "pron_dem",
      Self::Conj => "conj",
      Self::Part => "part",
      Self::Adv => "adv",
      Self::Unknown => "unknown",
    }
  }

  /// Parses an analyzer tag. Unrecognized tags map to [`PartOfSpeech::Unknown`].
  pub fn from_tag(tag: &str) -> Self {
    match tag {
      "verb" => Self::Verb,
      "noun" => Self::Noun,
      "noun_prop" => Self::NounProp,
      "adj" => Self::Adj,
      "prep" => Self::Prep,
      "pron" => Self::Pron,
      "pron_dem" => Self::PronDem,
      "conj" => Self::Conj,
      "part" => Self::Part,
      "adv" => Self::Adv,
      _ => Self::Unknown,
    }
  }
}

impl fmt::Display for PartOfSpeech {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.tag())
  }
}

/// Verb aspect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Aspect {
  /// Perfective (past)
  #[serde(rename = "p")]
  Perfective,
  /// Imperfective (present)
  #[serde(rename = "i")]
  Imperfective,
  /// Command (imperative)
  #[serde(rename = "c")]
  Command,
}

impl Aspect {
  /// Returns the one-letter code (`p`, `i`, `c`)
  pub fn code(&self) -> &'static str {
    match self {
      Self::Perfective => "p",
      Self::Imperfective => "i",
      Self::Command => "c",
    }
  }

  /// Parses a one-letter code
  pub fn from_code(code: &str) -> Option<Self> {
    match code {
      "p" => Some(Self::Perfective),
      "i" => Some(Self::Imperfective),
      "c" => Some(Self::Command),
      _ => None,
    }
  }
}

/// Clitic positions around a stem
///
/// `prc3` is the outermost proclitic (question particle), `prc0` the innermost
/// (definite article). `enc0` is the pronominal enclitic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CliticSlot {
  /// Question proclitic
  Prc3,
  /// Conjunction proclitic (wa, fa)
  Prc2,
  /// Preposition / future proclitic (bi, li, ka, sa)
  Prc1,
  /// Article proclitic (Al)
  Prc0,
  /// Pronominal enclitic
  Enc0,
}

impl CliticSlot {
  /// Feature key used in [`Analysis::features`]
  pub fn key(&self) -> &'static str {
    match self {
      Self::Prc3 => "prc3",
      Self::Prc2 => "prc2",
      Self::Prc1 => "prc1",
      Self::Prc0 => "prc0",
      Self::Enc0 => "enc0",
    }
  }

  /// Parses a feature key
  pub fn from_key(key: &str) -> Option<Self> {
    match key {
      "prc3" => Some(Self::Prc3),
      "prc2" => Some(Self::Prc2),
      "prc1" => Some(Self::Prc1),
      "prc0" => Some(Self::Prc0),
      "enc0" => Some(Self::Enc0),
      _ => None,
    }
  }
}

/// One candidate interpretation of a word returned by the analyzer
///
/// Immutable once returned; the resolver only reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
  /// Part of speech
  pub pos: PartOfSpeech,

  /// Lexeme (diacritized dictionary form)
  pub lex: String,

  /// Diacritized form of the whole word, clitics included
  pub diac: String,

  /// Verb aspect
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub aspect: Option<Aspect>,

  /// Auxiliary features
  #[serde(default)]
  pub features: Features,
}

impl Analysis {
  /// Constructor for Analysis
  pub fn new(pos: PartOfSpeech, lex: impl Into<String>, diac: impl Into<String>) -> Self {
    Self {
      pos,
      lex: lex.into(),
      diac: diac.into(),
      aspect: None,
      features: Features::new(),
    }
  }

  /// Builder that sets the aspect
  #[must_use]
  pub fn with_aspect(mut self, aspect: Aspect) -> Self {
    self.aspect = Some(aspect);
    self
  }

  /// Builder that adds one feature
  #[must_use]
  pub fn with_feature(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
    self.features.insert(key.into(), value.into());
    self
  }

  /// Builder that fills a clitic slot
  #[must_use]
  pub fn with_clitic(self, slot: CliticSlot, value: impl Into<String>) -> Self {
    self.with_feature(slot.key(), value)
  }

  /// Returns a feature value
  pub fn feature(&self, key: &str) -> Option<&str> {
    self.features.get(key).map(String::as_str)
  }

  /// Whether the feature is present
  pub fn has_feature(&self, key: &str) -> bool {
    self.features.contains_key(key)
  }

  /// Returns the value of a clitic slot
  pub fn clitic(&self, slot: CliticSlot) -> Option<&str> {
    self.feature(slot.key())
  }
}

/// Per-word output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
  /// Token as it appeared in the sentence
  pub word: String,

  /// Grammatical explanation
  pub explanation: String,

  /// Identifier of the rule that produced the explanation
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub rule: Option<String>,

  /// Raw candidate analyses, first one authoritative
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub analyses: Option<Vec<Analysis>>,
}

/// Sentence-level output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceAnalysis {
  /// Trimmed input sentence
  pub sentence: String,

  /// One entry per whitespace-separated word, in order
  pub results: Vec<AnalysisResult>,
}
