//! API State Definition

use std::sync::Arc;

use crate::config::Config;
use crate::service::I3rabApiService;

/// Application State
///
/// Read-only state shared across the entire server.
#[derive(Clone)]
pub struct AppState {
  /// Configuration
  pub config: Config,
  /// Analysis service
  ///
  /// - Production: `Arc::new(I3rabApiServiceFull::new(&config)?)`
  /// - Test: a stub implementing `I3rabApiService`
  pub service: Arc<dyn I3rabApiService>,
}

impl AppState {
  /// Creates a new AppState
  #[must_use]
  pub fn new(config: Config, service: Arc<dyn I3rabApiService>) -> Self {
    Self { config, service }
  }
}
