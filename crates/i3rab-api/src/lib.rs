//! i3rab-api crate
//!
//! Web server explaining the grammatical role (i3rab) of each word of an
//! Arabic sentence.
//!
//! ## Endpoints
//! - `POST /analyze` - Word-by-word explanation
//! - `GET /` - Liveness
//! - `GET /health` - Health Check
//!
//! ## Usage Example
//! ```bash
//! curl -X POST http://127.0.0.1:5000/analyze \
//!   -H "Content-Type: application/json" \
//!   -d '{"sentence": "كتب الولد"}'
//! ```

pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod service;

pub use api::AppState;
pub use config::Config;
pub use errors::{ApiError, ApiErrorKind};
pub use models::{AnalyzeRequest, AnalyzeResponse};
pub use service::I3rabApiServiceFull;
