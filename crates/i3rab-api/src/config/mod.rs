//! Config module

mod constants;
mod env;

pub use constants::{DEFAULT_HOST, DEFAULT_INCLUDE_ANALYSES, DEFAULT_PORT, MAX_TEXT_LENGTH};
pub use env::Config;
