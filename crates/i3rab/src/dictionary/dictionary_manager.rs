//! Dictionary Management Module
//!
//! Builds the vibrato-rkyv dictionary used by the analyzer.
//! The dictionary is built (or loaded) on the first `load()` and shared afterwards.
//! Sources are the bundled lexicon, a directory of MeCab-format source files, or a
//! dictionary file previously compiled with [`DictionaryManager::write_compiled`].

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Read};
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use tracing::info;
use vibrato_rkyv::dictionary::LoadMode;
use vibrato_rkyv::{Dictionary, SystemDictionaryBuilder};

use super::bundled;
use crate::config::DictionarySource;
use crate::errors::error_definition::DictionaryError;

/// Dictionary manager structure for vibrato-rkyv
pub struct DictionaryManager {
  /// Where the dictionary comes from
  source: DictionarySource,

  /// Cache of the loaded dictionary (Initialized only once at the first load)
  /// Held in Arc for sharing
  /// DictionaryError implements Clone so it can hold Result
  dictionary: OnceLock<Result<Arc<Dictionary>, DictionaryError>>,
}

impl DictionaryManager {
  /// Manager over the lexicon compiled into the binary
  pub fn bundled() -> Self {
    Self {
      source: DictionarySource::Bundled,
      dictionary: OnceLock::new(),
    }
  }

  /// Manager over a directory containing `lex.csv`, `matrix.def`, `char.def` and `unk.def`
  pub fn from_source_dir<P: AsRef<Path>>(dir: P) -> Result<Self, DictionaryError> {
    let dir = dir.as_ref().to_path_buf();

    if !dir.is_dir() {
      return Err(DictionaryError::DictionaryNotFound(dir.display().to_string()));
    }

    Ok(Self {
      source: DictionarySource::SourceDir(dir),
      dictionary: OnceLock::new(),
    })
  }

  /// Manager over a compiled dictionary file
  pub fn from_compiled_path<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
    let path = path.as_ref().to_path_buf();

    if !path.is_file() {
      return Err(DictionaryError::DictionaryNotFound(path.display().to_string()));
    }

    Ok(Self {
      source: DictionarySource::Compiled(path),
      dictionary: OnceLock::new(),
    })
  }

  /// Manager for a configured source
  pub fn from_source(source: &DictionarySource) -> Result<Self, DictionaryError> {
    match source {
      DictionarySource::Bundled => Ok(Self::bundled()),
      DictionarySource::SourceDir(dir) => Self::from_source_dir(dir),
      DictionarySource::Compiled(path) => Self::from_compiled_path(path),
    }
  }

  /// Returns the dictionary source
  pub fn source(&self) -> &DictionarySource {
    &self.source
  }

  /// Load dictionary
  /// Returns `Arc<Dictionary>` as we want a shared dictionary
  /// - Builds or loads the dictionary on the first call
  /// - Returns a clone of `Arc<Dictionary>` from the second call onwards
  /// - If an error occurs on the first call, caches the error and keeps returning it
  pub fn load(&self) -> Result<Arc<Dictionary>, DictionaryError> {
    self.dictionary.get_or_init(|| self.load_inner().map(Arc::new)).clone()
  }

  /// Internal implementation of dictionary loading
  fn load_inner(&self) -> Result<Dictionary, DictionaryError> {
    let dict = match &self.source {
      DictionarySource::Bundled => Self::build_from_readers(
        bundled::LEXICON.as_bytes(),
        bundled::MATRIX.as_bytes(),
        bundled::CHAR_DEF.as_bytes(),
        bundled::UNK_DEF.as_bytes(),
      ),
      DictionarySource::SourceDir(dir) => Self::load_from_source_dir(dir),
      DictionarySource::Compiled(path) => Self::load_from_compiled_path(path),
    }?;

    info!(source = ?self.source, "Dictionary loaded");
    Ok(dict)
  }

  /// Builds a dictionary from MeCab-format readers
  fn build_from_readers<S, C, P, U>(
    lexicon: S,
    matrix: C,
    char_def: P,
    unk_def: U,
  ) -> Result<Dictionary, DictionaryError>
  where
    S: Read,
    C: Read,
    P: Read,
    U: Read,
  {
    let inner = SystemDictionaryBuilder::from_readers(lexicon, matrix, char_def, unk_def)
      .map_err(|e| DictionaryError::VibratoBuild(Arc::new(e)))?;

    Ok(Dictionary::from_inner(inner))
  }

  /// Builds a dictionary from the four source files of `dir`
  fn load_from_source_dir(dir: &Path) -> Result<Dictionary, DictionaryError> {
    Self::build_from_readers(
      open_source_file(dir, bundled::LEXICON_FILE)?,
      open_source_file(dir, bundled::MATRIX_FILE)?,
      open_source_file(dir, bundled::CHAR_DEF_FILE)?,
      open_source_file(dir, bundled::UNK_DEF_FILE)?,
    )
  }

  /// Loads a compiled dictionary file
  fn load_from_compiled_path(path: &Path) -> Result<Dictionary, DictionaryError> {
    Dictionary::from_path(path, LoadMode::TrustCache)
      .map_err(|e| DictionaryError::VibratoLoad(Arc::new(e)))
  }

  /// Serializes the dictionary so it can be reloaded with [`DictionaryManager::from_compiled_path`]
  ///
  /// # Errors
  /// - The dictionary itself was loaded from a compiled file
  /// - Building the dictionary or writing the file failed
  pub fn write_compiled<P: AsRef<Path>>(&self, path: P) -> Result<(), DictionaryError> {
    let path = path.as_ref();

    if let DictionarySource::Compiled(compiled) = &self.source {
      return Err(DictionaryError::AlreadyCompiled(compiled.clone()));
    }

    let dict = self.load()?;
    let write_failed = |source: Arc<dyn std::error::Error + Send + Sync + 'static>| {
      DictionaryError::WriteFailed {
        path: path.to_path_buf(),
        source,
      }
    };

    let file = File::create(path).map_err(|e| write_failed(Arc::new(e)))?;
    dict.write(BufWriter::new(file)).map_err(|e| write_failed(Arc::new(e)))?;

    info!(path = %path.display(), "Compiled dictionary written");
    Ok(())
  }
}

/// Opens one MeCab source file inside `dir`
fn open_source_file(dir: &Path, name: &str) -> Result<File, DictionaryError> {
  let path: PathBuf = dir.join(name);
  File::open(&path).map_err(|e| DictionaryError::SourceFileRead {
    path,
    source: Arc::new(e),
  })
}

/// Manual `Debug` implementation for `DictionaryManager`
///
/// Since `vibrato_rkyv::Dictionary` does not implement the `Debug` trait,
/// `#[derive(Debug)]` cannot be used. Displays only meta information instead.
impl fmt::Debug for DictionaryManager {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("DictionaryManager")
      .field("source", &self.source)
      .field("dictionary_initialized", &self.dictionary.get().is_some())
      .finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn bundled_dictionary_builds() {
    let manager = DictionaryManager::bundled();
    assert!(manager.load().is_ok());
  }

  #[test]
  fn load_returns_shared_instance() {
    let manager = DictionaryManager::bundled();
    let first = manager.load().unwrap();
    let second = manager.load().unwrap();
    assert!(Arc::ptr_eq(&first, &second));
  }

  #[test]
  fn missing_source_dir_is_rejected() {
    let err = DictionaryManager::from_source_dir("/nonexistent/i3rab/dict").unwrap_err();
    assert!(matches!(err, DictionaryError::DictionaryNotFound(_)));
  }

  #[test]
  fn debug_shows_initialization_state() {
    let manager = DictionaryManager::bundled();
    assert!(format!("{manager:?}").contains("dictionary_initialized: false"));
    manager.load().unwrap();
    assert!(format!("{manager:?}").contains("dictionary_initialized: true"));
  }
}
