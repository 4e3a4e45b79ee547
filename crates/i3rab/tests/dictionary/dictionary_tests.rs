//! crates/i3rab/tests/dictionary/dictionary_tests.rs
//!
//! Dictionary sources other than the bundled lexicon.

use std::fs;
use std::sync::Arc;

use tempfile::TempDir;

use i3rab::analyzer::{MorphAnalyzer, VibratoAnalyzer};
use i3rab::config::{DictionarySource, I3rabConfig};
use i3rab::dictionary::DictionaryManager;
use i3rab::dictionary::bundled;
use i3rab::errors::DictionaryError;
use i3rab::explanation::GrammarCategory;
use i3rab::models::PartOfSpeech;
use i3rab::service::I3rabService;

/// Writes the bundled source files into a temporary directory
fn write_bundled_sources(dir: &TempDir) {
  fs::write(dir.path().join(bundled::LEXICON_FILE), bundled::LEXICON).unwrap();
  fs::write(dir.path().join(bundled::MATRIX_FILE), bundled::MATRIX).unwrap();
  fs::write(dir.path().join(bundled::CHAR_DEF_FILE), bundled::CHAR_DEF).unwrap();
  fs::write(dir.path().join(bundled::UNK_DEF_FILE), bundled::UNK_DEF).unwrap();
}

#[test]
fn source_dir_with_extra_entry() {
  let dir = TempDir::new().unwrap();
  write_bundled_sources(&dir);

  // add a lexeme missing from the bundled lexicon
  let mut lexicon = bundled::LEXICON.to_string();
  lexicon.push_str("نهر,2,2,100,stem,noun,نَهْر,نَهْرُ,nahor/NOUN+u/CASE_DEF_NOM,*,river\n");
  fs::write(dir.path().join(bundled::LEXICON_FILE), lexicon).unwrap();

  let manager = DictionaryManager::from_source_dir(dir.path()).unwrap();
  let analyzer = VibratoAnalyzer::from_shared_dictionary(manager.load().unwrap(), 5);

  let analyses = analyzer.analyze("النهر");
  assert_eq!(analyses.first().map(|a| a.pos), Some(PartOfSpeech::Noun));

  let service = I3rabService::new(Arc::new(analyzer));
  assert_eq!(
    service.analyze_word("النهر", false).explanation,
    GrammarCategory::Subject.explanation()
  );
}

#[test]
fn source_dir_missing_file_is_reported() {
  let dir = TempDir::new().unwrap();
  write_bundled_sources(&dir);
  fs::remove_file(dir.path().join(bundled::UNK_DEF_FILE)).unwrap();

  let manager = DictionaryManager::from_source_dir(dir.path()).unwrap();
  let Err(err) = manager.load() else {
    panic!("load should fail without unk.def");
  };
  assert!(matches!(err, DictionaryError::SourceFileRead { .. }));

  // the error is cached
  assert!(manager.load().is_err());
}

#[test]
fn malformed_lexicon_is_build_error() {
  let dir = TempDir::new().unwrap();
  write_bundled_sources(&dir);
  fs::write(dir.path().join(bundled::LEXICON_FILE), "كتب,notanumber\n").unwrap();

  let manager = DictionaryManager::from_source_dir(dir.path()).unwrap();
  assert!(matches!(
    manager.load(),
    Err(DictionaryError::VibratoBuild(_))
  ));
}

#[test]
fn compiled_dictionary_round_trip() {
  let dir = TempDir::new().unwrap();
  let compiled = dir.path().join("system.dic");

  DictionaryManager::bundled().write_compiled(&compiled).unwrap();
  assert!(compiled.is_file());

  let mut config = I3rabConfig::default();
  config.dictionary.source = DictionarySource::detect(&compiled);
  let service = I3rabService::init(&config).unwrap();

  assert_eq!(
    service.analyze_word("يكتب", false).explanation,
    GrammarCategory::Present.explanation()
  );

  // a compiled dictionary cannot be compiled again
  let manager = service.dictionary_manager().unwrap();
  assert!(matches!(
    manager.write_compiled(dir.path().join("again.dic")),
    Err(DictionaryError::AlreadyCompiled(_))
  ));
}
