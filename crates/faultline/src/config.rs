//! Configuration loading and types

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable pointing at an explicit config file
pub const CONFIG_ENV: &str = "FAULTLINE_CONFIG";

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid {field}: {value} is not an HTTP status code")]
    InvalidStatus { field: &'static str, value: u16 },

    #[error("invalid unhandled_status: {0} must be a client or server error")]
    SuccessfulUnhandledStatus(u16),
}

/// Top-level configuration for the faultline daemon
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Daemon server settings
    #[serde(default)]
    pub daemon: DaemonConfig,
    /// How failures become responses
    #[serde(default)]
    pub translation: TranslationConfig,
}

/// Daemon server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DaemonConfig {
    /// Address and port to bind to
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Log level (trace, debug, info, warn, error), overridden by `RUST_LOG`
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Log output format
    #[serde(default)]
    pub log_format: LogFormat,
}

impl Default for DaemonConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            log_level: default_log_level(),
            log_format: LogFormat::default(),
        }
    }
}

fn default_bind() -> String {
    "127.0.0.1:8080".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Status codes used when answering with a failure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationConfig {
    /// Status of a translated failure payload
    #[serde(default = "default_translated_status")]
    pub translated_status: u16,
    /// Status of a failure no translator claimed
    #[serde(default = "default_unhandled_status")]
    pub unhandled_status: u16,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            translated_status: default_translated_status(),
            unhandled_status: default_unhandled_status(),
        }
    }
}

fn default_translated_status() -> u16 {
    200
}

fn default_unhandled_status() -> u16 {
    500
}

impl TranslationConfig {
    /// Status for translated failures
    ///
    /// # Errors
    /// Returns error if the configured value is not a status code
    pub fn translated_status(&self) -> Result<StatusCode, ConfigError> {
        StatusCode::from_u16(self.translated_status).map_err(|_| ConfigError::InvalidStatus {
            field: "translated_status",
            value: self.translated_status,
        })
    }

    /// Status for untranslated failures, always 4xx or 5xx
    ///
    /// # Errors
    /// Returns error if the configured value is not an error status
    pub fn unhandled_status(&self) -> Result<StatusCode, ConfigError> {
        let status =
            StatusCode::from_u16(self.unhandled_status).map_err(|_| ConfigError::InvalidStatus {
                field: "unhandled_status",
                value: self.unhandled_status,
            })?;
        if !(status.is_client_error() || status.is_server_error()) {
            return Err(ConfigError::SuccessfulUnhandledStatus(self.unhandled_status));
        }
        Ok(status)
    }
}

impl Config {
    /// Load configuration from file
    ///
    /// # Errors
    /// Returns error if file cannot be read, parsed, or fails validation
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that serde cannot
    ///
    /// # Errors
    /// Returns the first invalid setting
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.translation.translated_status()?;
        self.translation.unhandled_status()?;
        Ok(())
    }

    /// Locate a config file: `$FAULTLINE_CONFIG` first, then common paths
    pub fn discover() -> Option<PathBuf> {
        Self::discover_with(std::env::var_os(CONFIG_ENV))
    }

    /// Discovery with the value of `$FAULTLINE_CONFIG` passed in
    fn discover_with(env_path: Option<OsString>) -> Option<PathBuf> {
        if let Some(path) = env_path.filter(|path| !path.is_empty()) {
            return Some(PathBuf::from(path));
        }

        let mut paths = vec![
            PathBuf::from("faultline.toml"),
            PathBuf::from("/etc/faultline/faultline.toml"),
        ];
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("faultline/faultline.toml"));
        }

        paths.into_iter().find(|path| path.exists())
    }

    /// Load from an explicit path, a discovered path, or use defaults
    ///
    /// # Errors
    /// Returns error if a config file exists but is invalid
    pub fn load_or_default(path: Option<&Path>) -> Result<(Self, Option<PathBuf>), ConfigError> {
        Self::load_from(path.map(Path::to_path_buf).or_else(Self::discover))
    }

    /// Load the located file, or fall back to defaults when there is none
    fn load_from(source: Option<PathBuf>) -> Result<(Self, Option<PathBuf>), ConfigError> {
        match source {
            Some(path) => Ok((Self::load(&path)?, Some(path))),
            None => Ok((Config::default(), None)),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.daemon.bind, "127.0.0.1:8080");
        assert_eq!(config.daemon.log_format, LogFormat::Pretty);
        assert_eq!(config.translation.translated_status().unwrap(), StatusCode::OK);
        assert_eq!(
            config.translation.unhandled_status().unwrap(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_parse_partial_file() {
        let config: Config = toml::from_str(
            r#"
            [daemon]
            log_format = "json"

            [translation]
            translated_status = 422
            "#,
        )
        .unwrap();

        assert_eq!(config.daemon.bind, "127.0.0.1:8080");
        assert_eq!(config.daemon.log_format, LogFormat::Json);
        assert_eq!(
            config.translation.translated_status().unwrap(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(config.translation.unhandled_status, 500);
    }

    #[test]
    fn test_rejects_successful_unhandled_status() {
        let config = Config {
            translation: TranslationConfig {
                translated_status: 200,
                unhandled_status: 204,
            },
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::SuccessfulUnhandledStatus(204))
        ));
    }

    #[test]
    fn test_rejects_out_of_range_status() {
        let config = Config {
            translation: TranslationConfig {
                translated_status: 1000,
                unhandled_status: 500,
            },
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidStatus {
                field: "translated_status",
                ..
            })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let result = Config::load(Path::new("/nonexistent/faultline.toml"));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn test_env_path_wins_discovery() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[translation]\ntranslated_status = 422").unwrap();

        let found = Config::discover_with(Some(file.path().as_os_str().to_owned()));
        assert_eq!(found.as_deref(), Some(file.path()));

        let (config, source) = Config::load_from(found).unwrap();
        assert_eq!(source.as_deref(), Some(file.path()));
        assert_eq!(
            config.translation.translated_status().unwrap(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn test_explicit_path_skips_discovery() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[daemon]\nbind = \"0.0.0.0:9000\"").unwrap();

        let (config, source) = Config::load_or_default(Some(file.path())).unwrap();
        assert_eq!(source.as_deref(), Some(file.path()));
        assert_eq!(config.daemon.bind, "0.0.0.0:9000");
    }

    #[test]
    fn test_no_file_means_defaults() {
        let (config, source) = Config::load_from(None).unwrap();
        assert!(source.is_none());
        assert_eq!(config.daemon.bind, "127.0.0.1:8080");
        assert_eq!(config.translation.unhandled_status, 500);
    }
}
