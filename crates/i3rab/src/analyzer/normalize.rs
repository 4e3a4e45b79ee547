//! Word normalization before lexicon lookup

/// Punctuation trimmed from both ends of a token
const EDGE_PUNCTUATION: &[char] = &[
  '.', ',', '!', '?', ':', ';', '"', '\'', '(', ')', '[', ']', '،', '؛', '؟', '«', '»', '…',
];

/// Tatweel (kashida), a purely typographic stretch
const TATWEEL: char = '\u{0640}';

/// Whether `c` is a short vowel, tanween, shadda, sukun or superscript alef
pub fn is_diacritic(c: char) -> bool {
  matches!(c, '\u{064B}'..='\u{0652}' | '\u{0670}')
}

/// Removes diacritics and tatweel, keeping the base letters
pub fn strip_diacritics(text: &str) -> String {
  text.chars().filter(|&c| !is_diacritic(c) && c != TATWEEL).collect()
}

/// Normalizes a token into the form stored in the lexicon
///
/// - surrounding punctuation trimmed
/// - diacritics and tatweel removed
///
/// Hamza forms and ta marbuta are kept as written.
pub fn normalize_word(word: &str) -> String {
  strip_diacritics(trim_edge_punctuation(word))
}

/// Token with surrounding punctuation and whitespace removed, diacritics kept
pub fn trim_edge_punctuation(word: &str) -> &str {
  word.trim_matches(|c: char| EDGE_PUNCTUATION.contains(&c) || c.is_whitespace())
}

/// Whether `text` carries any diacritic
pub fn has_diacritics(text: &str) -> bool {
  text.chars().any(is_diacritic)
}

/// Base letters, each with the diacritics written after it
fn letter_marks(text: &str) -> Vec<(char, Vec<char>)> {
  let mut letters: Vec<(char, Vec<char>)> = Vec::new();
  for c in text.chars() {
    if is_diacritic(c) {
      if let Some((_, marks)) = letters.last_mut() {
        marks.push(c);
      }
    } else if c != TATWEEL {
      letters.push((c, Vec::new()));
    }
  }
  letters
}

/// Whether the diacritized form `diac` keeps every mark written in `written`
///
/// Compared letter by letter. When the base letters differ there is nothing to
/// compare and the forms are taken to agree.
pub fn diacritics_agree(written: &str, diac: &str) -> bool {
  let written = letter_marks(written);
  let diac = letter_marks(diac);

  if written.len() != diac.len() || written.iter().zip(&diac).any(|(w, d)| w.0 != d.0) {
    return true;
  }

  written
    .iter()
    .zip(&diac)
    .all(|((_, typed), (_, candidate))| typed.iter().all(|m| candidate.contains(m)))
}
