//! Service module

mod i3rab_api_service;

pub use i3rab_api_service::{I3rabApiService, I3rabApiServiceFull};
