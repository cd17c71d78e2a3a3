//! Application state shared across HTTP handlers

use std::sync::Arc;

use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use faultline_core::TranslatorTable;

use crate::api::translation::global_translators;
use crate::config::{Config, ConfigError};

/// Application state shared across all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<Config>,
    /// Translators applied to failures raised by any handler
    pub global: Arc<TranslatorTable>,
    /// Status of translated failure payloads
    pub translated_status: StatusCode,
    /// Status of failures no translator claimed
    pub unhandled_status: StatusCode,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Create new application state with the built-in global translators
    ///
    /// # Errors
    /// Returns error if the translation status codes are invalid
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        Self::with_translators(config, global_translators())
    }

    /// Create new application state with a custom global table
    ///
    /// # Errors
    /// Returns error if the translation status codes are invalid
    pub fn with_translators(config: Config, global: TranslatorTable) -> Result<Self, ConfigError> {
        let translated_status = config.translation.translated_status()?;
        let unhandled_status = config.translation.unhandled_status()?;
        Ok(Self {
            config: Arc::new(config),
            global: Arc::new(global),
            translated_status,
            unhandled_status,
            started_at: Utc::now(),
        })
    }
}
