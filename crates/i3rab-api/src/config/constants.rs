//! API configuration constants

/// Maximum sentence length (bytes)
///
/// Requests above this are rejected before any analysis runs.
pub const MAX_TEXT_LENGTH: usize = 100_000;

/// Default host to bind
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default port to bind
pub const DEFAULT_PORT: u16 = 5000;

/// Whether candidate analyses are returned by default
pub const DEFAULT_INCLUDE_ANALYSES: bool = true;

/// Host to bind
pub const ENV_HOST: &str = "HOST";
/// Port to listen on
pub const ENV_PORT: &str = "PORT";
/// Dictionary directory or compiled file
pub const ENV_DICTIONARY: &str = "I3RAB_DICTIONARY";
/// N-best width
pub const ENV_MAX_CANDIDATES: &str = "I3RAB_MAX_CANDIDATES";
/// Whether responses carry candidate analyses
pub const ENV_INCLUDE_ANALYSES: &str = "I3RAB_INCLUDE_ANALYSES";
