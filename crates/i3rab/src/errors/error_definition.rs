//! Error definitions

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Configuration (I3rabConfig) related errors
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum ConfigError {
  /// analyzer.max_candidates is out of range
  #[error("analyzer.max_candidates must be between {min} and {max}: actual={actual}")]
  InvalidMaxCandidates {
    /// Smallest allowed value
    min: usize,
    /// Largest allowed value
    max: usize,
    /// Value actually given
    actual: usize,
  },

  /// dictionary.source points at a source directory that does not exist
  #[error("dictionary source directory is not a directory: path={path:?}")]
  InvalidSourceDir {
    /// Offending path
    path: PathBuf,
  },

  /// dictionary.source points at a compiled dictionary that does not exist
  #[error("compiled dictionary is not a file: path={path:?}")]
  InvalidCompiledPath {
    /// Offending path
    path: PathBuf,
  },

  /// The configuration document could not be parsed
  #[error("failed to parse configuration: {reason}")]
  Parse {
    /// Parser message
    reason: String,
  },
}

/// Dictionary related errors
///
/// The analyzer runs on a MeCab-format dictionary (lex.csv, matrix.def, char.def, unk.def)
/// compiled by vibrato-rkyv, either bundled into the binary or read from disk.
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum DictionaryError {
  /// The specified dictionary was not found
  #[error("dictionary not found: {0}")]
  DictionaryNotFound(String),

  /// One of the MeCab source files could not be read
  #[error("failed to read dictionary source file: path={path:?}, error={source}")]
  SourceFileRead {
    /// File that failed to open
    path: PathBuf,
    /// Underlying IO error
    #[source]
    source: Arc<io::Error>,
  },

  /// vibrato-rkyv rejected the MeCab source files
  #[error("vibrato-rkyv dictionary build error: {0}")]
  VibratoBuild(Arc<dyn std::error::Error + Send + Sync + 'static>),

  /// vibrato-rkyv failed to load a compiled dictionary
  #[error("vibrato-rkyv dictionary load error: {0}")]
  VibratoLoad(Arc<dyn std::error::Error + Send + Sync + 'static>),

  /// Serializing the dictionary to disk failed
  #[error("failed to write compiled dictionary: path={path:?}, error={source}")]
  WriteFailed {
    /// Destination path
    path: PathBuf,
    /// Underlying error
    #[source]
    source: Arc<dyn std::error::Error + Send + Sync + 'static>,
  },

  /// The dictionary was loaded from a compiled file and cannot be compiled again
  #[error("dictionary is already compiled: {0}")]
  AlreadyCompiled(PathBuf),
}

/// Analyzer related errors
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum AnalyzerError {
  /// The sentence is empty or whitespace-only
  #[error("sentence is empty")]
  EmptySentence,
}

/// Unified error
/// Public APIs of this crate return this error
/// Use as `I3rabResult<T>` = `Result<T, I3rabError>`
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum I3rabError {
  /// Dictionary related errors
  #[error(transparent)]
  Dictionary(#[from] DictionaryError),

  /// Analyzer related errors
  #[error(transparent)]
  Analyzer(#[from] AnalyzerError),

  /// Configuration errors
  #[error(transparent)]
  Config(#[from] ConfigError),
}

/// Standard Result type alias of the i3rab crate
pub type I3rabResult<T> = Result<T, I3rabError>;
