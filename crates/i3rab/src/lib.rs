//! i3rab grammatical explanation library
//!
//! Analyzes Arabic words with vibrato-rkyv and explains their grammatical role (i3rab)
//! through a fixed rule table.

/// Analyzer module - MorphAnalyzer trait and the vibrato-rkyv based implementation
pub mod analyzer;

/// Configuration module - I3rabConfig, DictionarySource etc.
pub mod config;

/// Dictionary module - builds and loads the vibrato-rkyv dictionary
pub mod dictionary;

/// Error module - I3rabError, I3rabResult etc.
pub mod errors;

/// Explanation module - rule table and resolver
pub mod explanation;

/// Data model module - Analysis, AnalysisResult etc.
pub mod models;

/// Service module - I3rabService facade
pub mod service;

/// Re-export
pub use config::{DictionarySource, I3rabConfig};
pub use errors::{I3rabError, I3rabResult};
pub use explanation::{ExplanationResolver, explain};
pub use models::{Analysis, AnalysisResult, SentenceAnalysis};
pub use service::I3rabService;
