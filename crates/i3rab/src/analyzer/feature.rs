//! Lexicon feature parsing and morpheme composition
//!
//! Feature layout of the lexicon (the columns after `surface,left_id,right_id,cost`):
//!
//! ```text
//! kind,pos,lex,diac,bw,aspect,gloss
//! ```
//!
//! `kind` is `stem`, a clitic slot (`prc3`..`prc0`, `enc0`) or `unk`.
//! For clitics `lex` holds the slot value (e.g. `Al_det`). `*` marks an empty column.

use crate::models::model_definition::{BW_FEATURE, GLOSS_FEATURE};
use crate::models::{Analysis, Aspect, CliticSlot, PartOfSpeech};

/// Column indices in the feature string
const IDX_KIND: usize = 0;
const IDX_POS: usize = 1;
const IDX_LEX: usize = 2;
const IDX_DIAC: usize = 3;
const IDX_BW: usize = 4;
const IDX_ASPECT: usize = 5;
const IDX_GLOSS: usize = 6;

/// Number of feature columns
const FEATURE_COLUMNS: usize = 7;

/// Separator of the `bw` tag chain
const BW_SEPARATOR: &str = "+";

/// Role of a morpheme inside a word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MorphemeKind {
  /// Stem carrying pos / lex / aspect
  Stem,
  /// Clitic filling a slot
  Clitic(CliticSlot),
  /// Unknown-word node produced from unk.def
  Unknown,
}

impl MorphemeKind {
  /// Parses the `kind` column
  pub fn from_code(code: &str) -> Self {
    match code {
      "stem" => Self::Stem,
      other => CliticSlot::from_key(other).map_or(Self::Unknown, Self::Clitic),
    }
  }
}

/// One lattice node converted from a vibrato token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Morpheme {
  /// Surface form
  pub surface: String,
  /// Role
  pub kind: MorphemeKind,
  /// Part-of-speech tag
  pub pos: Option<String>,
  /// Lexeme, or slot value for clitics
  pub lex: Option<String>,
  /// Diacritized form
  pub diac: Option<String>,
  /// Buckwalter-style tag
  pub bw: Option<String>,
  /// Aspect
  pub aspect: Option<Aspect>,
  /// English gloss
  pub gloss: Option<String>,
}

impl Morpheme {
  /// Converts a vibrato token
  ///
  /// # Arguments
  /// * `surface` - Surface form
  /// * `feature` - Feature string (comma separated)
  pub fn from_feature(surface: &str, feature: &str) -> Self {
    let parts: Vec<&str> = feature.splitn(FEATURE_COLUMNS, ',').collect();

    let get_part = |idx: usize| -> Option<String> {
      parts.get(idx).and_then(|s| {
        if s.is_empty() || *s == "*" {
          None
        } else {
          Some((*s).to_string())
        }
      })
    };

    let kind = parts.get(IDX_KIND).map_or(MorphemeKind::Unknown, |s| MorphemeKind::from_code(s));

    Self {
      surface: surface.to_string(),
      kind,
      pos: get_part(IDX_POS),
      lex: get_part(IDX_LEX),
      diac: get_part(IDX_DIAC),
      bw: get_part(IDX_BW),
      aspect: get_part(IDX_ASPECT).as_deref().and_then(Aspect::from_code),
      gloss: get_part(IDX_GLOSS),
    }
  }

  /// Diacritized form, falling back to the surface
  fn diac_or_surface(&self) -> &str {
    self.diac.as_deref().unwrap_or(&self.surface)
  }
}

/// Composes the morphemes of one lattice path into an analysis
///
/// Returns `None` when the path contains an unknown-word node or does not have exactly
/// one stem.
pub fn compose_analysis(morphemes: &[Morpheme]) -> Option<Analysis> {
  let mut stem: Option<&Morpheme> = None;
  let mut diac = String::new();
  let mut tags: Vec<&str> = Vec::with_capacity(morphemes.len());
  let mut clitics: Vec<(CliticSlot, &str)> = Vec::new();

  for morpheme in morphemes {
    match morpheme.kind {
      MorphemeKind::Unknown => return None,
      MorphemeKind::Stem => {
        if stem.replace(morpheme).is_some() {
          return None;
        }
      }
      MorphemeKind::Clitic(slot) => {
        clitics.push((slot, morpheme.lex.as_deref().unwrap_or(&morpheme.surface)));
      }
    }
    diac.push_str(morpheme.diac_or_surface());
    if let Some(bw) = &morpheme.bw {
      tags.push(bw);
    }
  }

  let stem = stem?;
  let pos = stem.pos.as_deref().map_or(PartOfSpeech::Unknown, PartOfSpeech::from_tag);
  let lex = stem.lex.clone().unwrap_or_else(|| stem.surface.clone());

  let mut analysis = Analysis::new(pos, lex, diac);
  analysis.aspect = stem.aspect;
  if !tags.is_empty() {
    analysis = analysis.with_feature(BW_FEATURE, tags.join(BW_SEPARATOR));
  }
  if let Some(gloss) = &stem.gloss {
    analysis = analysis.with_feature(GLOSS_FEATURE, gloss.clone());
  }
  for (slot, value) in clitics {
    analysis = analysis.with_clitic(slot, value);
  }

  Some(analysis)
}
