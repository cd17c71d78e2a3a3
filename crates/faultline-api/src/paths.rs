//! Route prefixes and endpoint paths

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Root of every versioned handler
pub const BASE_PATH: &str = "/exception-handling";

pub const HEALTH: &str = "/health";
pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";
pub const DOCS: &str = "/docs";

pub const GIVE_ME_SUCCESS: &str = "/give-me-success";
pub const GIVE_ME_HANDLED_EXCEPTION: &str = "/give-me-handled-exception";
pub const GIVE_ME_HANDLED_GLOBALLY_EXCEPTION: &str = "/give-me-handled-globally-exception";
pub const GIVE_ME_UNHANDLED_EXCEPTION: &str = "/give-me-unhandled-exception";

/// Query parameter that asks an endpoint to fail
pub const THROW_PARAM: &str = "isThrowException";

/// Handler version, each mounted under its own prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiVersion {
    V1,
    V2,
}

impl ApiVersion {
    /// All mounted versions
    pub const ALL: [ApiVersion; 2] = [ApiVersion::V1, ApiVersion::V2];

    /// Path prefix, e.g. `/exception-handling/v1`
    #[must_use]
    pub fn prefix(self) -> String {
        format!("{BASE_PATH}/{self}")
    }

    /// Full path of an endpoint under this version
    #[must_use]
    pub fn path(self, endpoint: &str) -> String {
        format!("{}{endpoint}", self.prefix())
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiVersion::V1 => f.write_str("v1"),
            ApiVersion::V2 => f.write_str("v2"),
        }
    }
}

impl FromStr for ApiVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "v1" => Ok(ApiVersion::V1),
            "v2" => Ok(ApiVersion::V2),
            other => Err(format!("unknown api version: {other}")),
        }
    }
}
