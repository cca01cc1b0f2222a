//! Axum HTTP API server.
//!
//! Thin adapter over the agent pipeline:
//! - Per-stage endpoints (`/analyze`, `/generate-script`, `/create-visual-plan`)
//! - Full pipeline endpoint (`/full-pipeline`)
//! - Health and sample-payload endpoints

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use state::AppState;
