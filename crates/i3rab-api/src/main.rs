//! i3rab-api server entry point

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use i3rab_api::ApiError;
use i3rab_api::api::AppState;
use i3rab_api::api::run_server;
use i3rab_api::config::Config;
use i3rab_api::service::I3rabApiServiceFull;

#[tokio::main]
async fn main() -> Result<(), ApiError> {
  tracing_subscriber::registry()
    .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with(tracing_subscriber::fmt::layer())
    .init();

  let config = Config::from_env()?;
  tracing::info!(
    bind_addr = %config.bind_addr,
    dictionary = ?config.dictionary,
    max_candidates = config.max_candidates,
    "Configuration loaded"
  );

  // Dictionary is built here, once
  let service = Arc::new(I3rabApiServiceFull::new(&config)?);
  tracing::info!("Analysis service initialized");

  let state = AppState::new(config, service);

  run_server(state).await
}
