//! condense-api crate
//!
//! Web server relaying summarization requests to a generative-language API and
//! recording every successful summary.
//!
//! ## Endpoints
//! - `POST /summarize` - Summarize text
//! - `GET /health` - Health Check
//!
//! ## Usage Example
//! ```bash
//! curl -X POST http://127.0.0.1:3000/summarize \
//!   -H "Content-Type: application/json" \
//!   -d '{"text": "The sky is blue because of Rayleigh scattering.", "summaryType": "brief"}'
//! ```

pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod service;

pub use api::AppState;
pub use config::Config;
pub use errors::{ApiError, ApiErrorKind};
pub use models::{SummarizeRequest, SummarizeResponse};
pub use service::CondenseApiServiceFull;
