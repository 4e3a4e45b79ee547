//! Data model module
pub mod model_definition;

/// Re-export
pub use model_definition::{
  Analysis, AnalysisResult, Aspect, CliticSlot, Features, PartOfSpeech, SentenceAnalysis,
};
