//! Grammar categories and their explanatory sentences

use std::fmt;

/// Grammatical category a rule can resolve to
///
/// Each category carries an Arabic label and a fixed explanation.
/// The table is static and never changes at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GrammarCategory {
  /// Past verb ending in the subject ta
  PastAttachedTa,
  /// Past verb built on fatha
  PastOnFatha,
  /// Present (imperfective) verb
  Present,
  /// Preposition
  Preposition,
  /// Attached or separate personal pronoun
  AttachedPronoun,
  /// Demonstrative noun
  Demonstrative,
  /// Nominative noun (subject)
  Subject,
  /// Accusative noun (object)
  Object,
  /// Genitive noun
  Genitive,
}

impl GrammarCategory {
  /// Every category, in table order
  pub const ALL: [GrammarCategory; 9] = [
    Self::PastAttachedTa,
    Self::PastOnFatha,
    Self::Present,
    Self::Preposition,
    Self::AttachedPronoun,
    Self::Demonstrative,
    Self::Subject,
    Self::Object,
    Self::Genitive,
  ];

  /// Arabic category label
  pub fn label(&self) -> &'static str {
    match self {
      Self::PastAttachedTa | Self::PastOnFatha => "فعل ماضي",
      Self::Present => "فعل مضارع",
      Self::Preposition => "حرف جر",
      Self::AttachedPronoun => "ضمير متصل",
      Self::Demonstrative => "اسم إشارة",
      Self::Subject => "فاعل",
      Self::Object => "مفعول به",
      Self::Genitive => "مجرور",
    }
  }

  /// Explanatory sentence
  pub fn explanation(&self) -> &'static str {
    match self {
      Self::PastAttachedTa => "فعل ماضي مبني على السكون لاتصاله بتاء المتحرك",
      Self::PastOnFatha => "فعل ماضي مبني على الفتح",
      Self::Present => "فعل مضارع مرفوع وعلامة رفعه الضمة",
      Self::Preposition => "حرف جر يؤدي إلى مجرور ما بعده",
      Self::AttachedPronoun => "ضمير متصل مبني في محل رفع فاعل أو غيره حسب السياق",
      Self::Demonstrative => "اسم إشارة يدل على شيء معين",
      Self::Subject => "فاعل مرفوع يدل على من قام بالفعل",
      Self::Object => "مفعول به منصوب يدل على من وقع عليه الفعل",
      Self::Genitive => "مجرور بحرف جر أو إضافة",
    }
  }
}

impl fmt::Display for GrammarCategory {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.label())
  }
}
