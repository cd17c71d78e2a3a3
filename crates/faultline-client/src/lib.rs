//! faultline-client: HTTP client library
//!
//! Calls the versioned endpoints of the faultline daemon and decodes either
//! a success payload or a translated failure.
//!
//! # Examples
//!
//! ```no_run
//! use faultline_api::paths::ApiVersion;
//! use faultline_api::responses::EndpointResponse;
//! use faultline_client::HttpClient;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = HttpClient::new("http://localhost:8080")?;
//!
//! let health = client.health().await?;
//! println!("Status: {}", health.status);
//!
//! match client.handled(ApiVersion::V1, true).await? {
//!     EndpointResponse::Error(error) => println!("translated: {}", error.message),
//!     EndpointResponse::Success(payload) => println!("success: {}", payload.name),
//! }
//!
//! // No translator claims this one, so it surfaces as an API error
//! let err = client.unhandled(ApiVersion::V1, true).await.unwrap_err();
//! assert_eq!(err.status(), Some(500));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod http;

pub use error::{ClientError, Result};
pub use http::HttpClient;
