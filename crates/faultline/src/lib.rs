//! faultline daemon
//!
//! axum HTTP server whose handlers raise failures on request and whose
//! translation layers turn them into structured payloads, scoped per
//! handler or applied across the whole application.

pub mod api;
pub mod config;
pub mod router;
pub mod state;
pub mod telemetry;

pub use config::Config;
pub use router::create_router;
pub use state::AppState;
