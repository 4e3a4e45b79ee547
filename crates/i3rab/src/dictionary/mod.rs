//! dictionary module
pub mod bundled;
pub mod dictionary_manager;

/// Re-export
pub use dictionary_manager::DictionaryManager;
