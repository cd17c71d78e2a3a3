//! Response types for the API

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Payload returned by every endpoint that does not fail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SuccessResponse {
    pub name: String,
    pub data: Option<InnerSuccessResponse>,
    /// Always `null` for the built-in endpoints
    #[serde(default)]
    pub properties: Option<BTreeMap<String, String>>,
}

impl SuccessResponse {
    #[must_use]
    pub fn new(name: impl Into<String>, data: InnerSuccessResponse) -> Self {
        Self {
            name: name.into(),
            data: Some(data),
            properties: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct InnerSuccessResponse {
    pub name: String,
    pub values: Vec<String>,
}

impl InnerSuccessResponse {
    #[must_use]
    pub fn new(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }
}

/// Structured body produced when a failure is translated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub message: String,
    pub source_class: String,
}

/// Either body a failure-capable endpoint can answer with on success status
///
/// Error bodies are tried first since a success body never has `sourceClass`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum EndpointResponse {
    Error(ErrorResponse),
    Success(SuccessResponse),
}

impl EndpointResponse {
    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, EndpointResponse::Error(_))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub started_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn success() -> SuccessResponse {
        SuccessResponse::new(
            "give-me-success",
            InnerSuccessResponse::new("success name", vec!["one success value".to_string()]),
        )
    }

    #[test]
    fn test_success_shape() {
        let json = serde_json::to_value(success()).unwrap();
        assert_eq!(json["name"], "give-me-success");
        assert_eq!(json["data"]["values"][0], "one success value");
        assert!(json["properties"].is_null());
        assert!(json.as_object().unwrap().contains_key("properties"));
    }

    #[test]
    fn test_error_uses_camel_case() {
        let error = ErrorResponse {
            message: "boom".to_string(),
            source_class: "a::B".to_string(),
        };
        let json = serde_json::to_value(&error).unwrap();
        assert_eq!(json["sourceClass"], "a::B");
        assert!(json.get("source_class").is_none());
    }

    #[test]
    fn test_endpoint_response_decoding() {
        let body = serde_json::to_string(&success()).unwrap();
        let decoded: EndpointResponse = serde_json::from_str(&body).unwrap();
        assert_eq!(decoded, EndpointResponse::Success(success()));

        let decoded: EndpointResponse =
            serde_json::from_str(r#"{"message":"m","sourceClass":"s"}"#).unwrap();
        assert!(decoded.is_error());
    }
}
