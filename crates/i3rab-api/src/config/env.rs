//! Config loading from environment variables

use i3rab::config::{AnalyzerConfig, DEFAULT_MAX_CANDIDATES, DictionaryConfig, DictionarySource};
use i3rab::I3rabConfig;

use super::constants::{
  DEFAULT_HOST, DEFAULT_INCLUDE_ANALYSES, DEFAULT_PORT, ENV_DICTIONARY, ENV_HOST,
  ENV_INCLUDE_ANALYSES, ENV_MAX_CANDIDATES, ENV_PORT,
};
use crate::errors::ApiError;

/// API Server Configuration
#[derive(Debug, Clone)]
pub struct Config {
  /// Bind address (e.g. "0.0.0.0:5000")
  pub bind_addr: String,
  /// Dictionary to analyze with
  pub dictionary: DictionarySource,
  /// N-best width handed to the analyzer
  pub max_candidates: usize,
  /// Whether each result carries its candidate analyses
  pub include_analyses: bool,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      bind_addr: format!("{DEFAULT_HOST}:{DEFAULT_PORT}"),
      dictionary: DictionarySource::Bundled,
      max_candidates: DEFAULT_MAX_CANDIDATES,
      include_analyses: DEFAULT_INCLUDE_ANALYSES,
    }
  }
}

impl Config {
  /// Loads configuration from environment variables
  ///
  /// # Errors
  /// Returns an error if environment variable values are invalid
  pub fn from_env() -> crate::errors::Result<Self> {
    Self::from_vars(|key| std::env::var(key).ok())
  }

  /// Loads configuration through a variable lookup
  ///
  /// Empty values count as unset.
  ///
  /// # Errors
  /// Returns `ApiError::Config` for an unparsable port, candidate count or flag
  pub fn from_vars<F>(lookup: F) -> crate::errors::Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    let host = var(ENV_HOST).unwrap_or_else(|| DEFAULT_HOST.to_string());

    let port = match var(ENV_PORT) {
      Some(raw) => raw
        .trim()
        .parse::<u16>()
        .map_err(|e| ApiError::config(format!("invalid {ENV_PORT} {raw:?}: {e}")))?,
      None => DEFAULT_PORT,
    };

    let dictionary = var(ENV_DICTIONARY).map_or(DictionarySource::Bundled, DictionarySource::detect);

    let max_candidates = match var(ENV_MAX_CANDIDATES) {
      Some(raw) => raw
        .trim()
        .parse::<usize>()
        .map_err(|e| ApiError::config(format!("invalid {ENV_MAX_CANDIDATES} {raw:?}: {e}")))?,
      None => DEFAULT_MAX_CANDIDATES,
    };

    let include_analyses = match var(ENV_INCLUDE_ANALYSES) {
      Some(raw) => parse_flag(&raw).ok_or_else(|| {
        ApiError::config(format!(
          "invalid {ENV_INCLUDE_ANALYSES} {raw:?}: expected true or false"
        ))
      })?,
      None => DEFAULT_INCLUDE_ANALYSES,
    };

    Ok(Self {
      bind_addr: format!("{host}:{port}"),
      dictionary,
      max_candidates,
      include_analyses,
    })
  }

  /// Library configuration for `I3rabService::init`
  #[must_use]
  pub fn to_core_config(&self) -> I3rabConfig {
    I3rabConfig {
      dictionary: DictionaryConfig {
        source: self.dictionary.clone(),
      },
      analyzer: AnalyzerConfig {
        max_candidates: self.max_candidates,
      },
    }
  }
}

fn parse_flag(raw: &str) -> Option<bool> {
  match raw.trim().to_ascii_lowercase().as_str() {
    "true" | "1" | "yes" => Some(true),
    "false" | "0" | "no" => Some(false),
    _ => None,
  }
}
