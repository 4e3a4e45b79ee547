// crates/i3rab/src/config.rs

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::errors::ConfigError;

/// Default N-best width of the analyzer
pub const DEFAULT_MAX_CANDIDATES: usize = 5;
/// Smallest allowed N-best width
pub const MIN_MAX_CANDIDATES: usize = 1;
/// Largest allowed N-best width
pub const MAX_MAX_CANDIDATES: usize = 32;

/// Top-level configuration for i3rab.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct I3rabConfig {
  /// [dictionary] section
  #[serde(default)]
  pub dictionary: DictionaryConfig,
  /// [analyzer] section
  #[serde(default)]
  pub analyzer: AnalyzerConfig,
}

/// [dictionary] section configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DictionaryConfig {
  /// Where the dictionary is read from
  #[serde(default)]
  pub source: DictionarySource,
}

/// Source of the vibrato-rkyv dictionary.
///
/// Deserializes from `{"kind": "bundled"}`, `{"kind": "source-dir", "path": "..."}`
/// or `{"kind": "compiled", "path": "..."}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", content = "path", rename_all = "kebab-case")]
pub enum DictionarySource {
  /// Lexicon compiled into the binary
  #[default]
  Bundled,
  /// Directory with `lex.csv`, `matrix.def`, `char.def`, `unk.def`
  SourceDir(PathBuf),
  /// Dictionary file written by `DictionaryManager::write_compiled`
  Compiled(PathBuf),
}

impl DictionarySource {
  /// Picks the source kind from what exists at `path`.
  ///
  /// - directory → `SourceDir`
  /// - anything else → `Compiled` (existence is checked by `validate`)
  pub fn detect(path: impl AsRef<Path>) -> Self {
    let path = path.as_ref();
    if path.is_dir() {
      Self::SourceDir(path.to_path_buf())
    } else {
      Self::Compiled(path.to_path_buf())
    }
  }
}

/// [analyzer] section configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzerConfig {
  /// Maximum number of candidate analyses per word (N-best width)
  #[serde(default = "default_max_candidates")]
  pub max_candidates: usize,
}

impl Default for AnalyzerConfig {
  fn default() -> Self {
    Self {
      max_candidates: DEFAULT_MAX_CANDIDATES,
    }
  }
}

/// Default N-best width
fn default_max_candidates() -> usize {
  DEFAULT_MAX_CANDIDATES
}

// ===== Accessor Methods =====

impl I3rabConfig {
  /// Parses a JSON configuration document.
  ///
  /// Missing sections fall back to their defaults.
  ///
  /// # Errors
  /// Returns `ConfigError::Parse` if the document is malformed.
  pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
    serde_json::from_str(json).map_err(|e| ConfigError::Parse {
      reason: e.to_string(),
    })
  }

  /// Returns the dictionary source.
  pub fn dictionary_source(&self) -> &DictionarySource {
    &self.dictionary.source
  }

  /// Returns the N-best width.
  pub fn max_candidates(&self) -> usize {
    self.analyzer.max_candidates
  }

  /// Validates the configuration.
  ///
  /// # Validation Items
  /// - `analyzer.max_candidates` is within 1..=32
  /// - a `source-dir` dictionary points at an existing directory
  /// - a `compiled` dictionary points at an existing file
  ///
  /// # Errors
  /// Returns the corresponding `ConfigError` if validation fails.
  pub fn validate(&self) -> Result<(), ConfigError> {
    let max_candidates = self.analyzer.max_candidates;
    if !(MIN_MAX_CANDIDATES..=MAX_MAX_CANDIDATES).contains(&max_candidates) {
      return Err(ConfigError::InvalidMaxCandidates {
        min: MIN_MAX_CANDIDATES,
        max: MAX_MAX_CANDIDATES,
        actual: max_candidates,
      });
    }

    match &self.dictionary.source {
      DictionarySource::Bundled => {}
      DictionarySource::SourceDir(dir) => {
        if !dir.is_dir() {
          return Err(ConfigError::InvalidSourceDir { path: dir.clone() });
        }
      }
      DictionarySource::Compiled(path) => {
        if !path.is_file() {
          return Err(ConfigError::InvalidCompiledPath { path: path.clone() });
        }
      }
    }

    Ok(())
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;
  use std::fs;
  use tempfile::TempDir;

  #[test]
  fn default_config_is_valid() {
    let config = I3rabConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.dictionary_source(), &DictionarySource::Bundled);
    assert_eq!(config.max_candidates(), DEFAULT_MAX_CANDIDATES);
  }

  #[test]
  fn empty_json_uses_defaults() {
    let config = I3rabConfig::from_json_str("{}").unwrap();
    assert_eq!(config.max_candidates(), DEFAULT_MAX_CANDIDATES);
    assert_eq!(config.dictionary_source(), &DictionarySource::Bundled);
  }

  #[test]
  fn json_selects_source_dir() {
    let config = I3rabConfig::from_json_str(
      r#"{"dictionary": {"source": {"kind": "source-dir", "path": "/opt/i3rab/dict"}},
          "analyzer": {"max_candidates": 3}}"#,
    )
    .unwrap();
    assert_eq!(
      config.dictionary_source(),
      &DictionarySource::SourceDir(PathBuf::from("/opt/i3rab/dict"))
    );
    assert_eq!(config.max_candidates(), 3);
  }

  #[test]
  fn malformed_json_is_parse_error() {
    let err = I3rabConfig::from_json_str("{ nope").unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
  }

  #[test]
  fn zero_candidates_is_rejected() {
    let mut config = I3rabConfig::default();
    config.analyzer.max_candidates = 0;
    assert!(matches!(
      config.validate(),
      Err(ConfigError::InvalidMaxCandidates { actual: 0, .. })
    ));
  }

  #[test]
  fn too_many_candidates_is_rejected() {
    let mut config = I3rabConfig::default();
    config.analyzer.max_candidates = MAX_MAX_CANDIDATES + 1;
    assert!(config.validate().is_err());
  }

  #[test]
  fn missing_source_dir_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = I3rabConfig::default();
    config.dictionary.source = DictionarySource::SourceDir(temp_dir.path().join("missing"));
    assert!(matches!(
      config.validate(),
      Err(ConfigError::InvalidSourceDir { .. })
    ));
  }

  #[test]
  fn detect_distinguishes_dir_and_file() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("system.dic");
    fs::write(&file, b"").unwrap();

    assert_eq!(
      DictionarySource::detect(temp_dir.path()),
      DictionarySource::SourceDir(temp_dir.path().to_path_buf())
    );
    assert_eq!(DictionarySource::detect(&file), DictionarySource::Compiled(file.clone()));

    let mut config = I3rabConfig::default();
    config.dictionary.source = DictionarySource::detect(&file);
    assert!(config.validate().is_ok());
  }
}
