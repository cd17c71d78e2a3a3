//! HTTP client for the faultline daemon

use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

use faultline_api::{
    paths::{self, ApiVersion},
    requests::ThrowQuery,
    responses::{EndpointResponse, HealthResponse, SuccessResponse},
};

use crate::error::{ClientError, Result};

/// HTTP client for communicating with the faultline daemon
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: Url,
}

impl HttpClient {
    /// Create a new HTTP client
    ///
    /// # Errors
    /// Returns an error if the base URL is invalid.
    ///
    /// # Example
    /// ```no_run
    /// use faultline_client::HttpClient;
    ///
    /// let client = HttpClient::new("http://localhost:8080")?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        let base_url = Url::parse(base_url.as_ref())?;
        Ok(Self {
            client: Client::new(),
            base_url,
        })
    }

    /// Create a new HTTP client with custom `reqwest::Client`
    ///
    /// # Errors
    /// Returns an error if the base URL is invalid.
    pub fn with_client(base_url: impl AsRef<str>, client: Client) -> Result<Self> {
        let base_url = Url::parse(base_url.as_ref())?;
        Ok(Self { client, base_url })
    }

    /// Build a full URL from a path
    fn url(&self, path: &str) -> Result<Url> {
        self.base_url.join(path).map_err(ClientError::Url)
    }

    /// Build the URL of a versioned endpoint, with the throw flag if given
    fn endpoint_url(&self, version: ApiVersion, endpoint: &str, query: &ThrowQuery) -> Result<Url> {
        let mut url = self.url(&version.path(endpoint))?;
        if let Some(flag) = &query.is_throw_exception {
            url.query_pairs_mut().append_pair(paths::THROW_PARAM, flag);
        }
        Ok(url)
    }

    /// Perform a GET request and deserialize the response
    async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        tracing::debug!(%url, "GET");
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(ClientError::Api { status, message });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    // System endpoints

    /// Get daemon health status
    ///
    /// # Errors
    /// Returns an error if the request fails or the daemon returns an error.
    pub async fn health(&self) -> Result<HealthResponse> {
        self.get(self.url(paths::HEALTH)?).await
    }

    // Versioned endpoints

    /// Call `give-me-success`
    ///
    /// # Errors
    /// Returns an error if the request fails or the daemon returns an error.
    pub async fn success(&self, version: ApiVersion) -> Result<SuccessResponse> {
        let url = self.endpoint_url(version, paths::GIVE_ME_SUCCESS, &ThrowQuery::default())?;
        self.get(url).await
    }

    /// Call `give-me-handled-exception`
    ///
    /// # Errors
    /// Returns an error if the request fails or the failure is not translated.
    ///
    /// # Example
    /// ```no_run
    /// # use faultline_api::paths::ApiVersion;
    /// # use faultline_client::HttpClient;
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = HttpClient::new("http://localhost:8080")?;
    /// let response = client.handled(ApiVersion::V1, true).await?;
    /// assert!(response.is_error());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn handled(&self, version: ApiVersion, throw: bool) -> Result<EndpointResponse> {
        self.call(version, paths::GIVE_ME_HANDLED_EXCEPTION, &ThrowQuery::new(throw))
            .await
    }

    /// Call `give-me-handled-globally-exception`
    ///
    /// # Errors
    /// Returns an error if the request fails or the failure is not translated.
    pub async fn handled_globally(
        &self,
        version: ApiVersion,
        throw: bool,
    ) -> Result<EndpointResponse> {
        self.call(
            version,
            paths::GIVE_ME_HANDLED_GLOBALLY_EXCEPTION,
            &ThrowQuery::new(throw),
        )
        .await
    }

    /// Call `give-me-unhandled-exception`
    ///
    /// # Errors
    /// Returns an error if the request fails or the daemon returns an error,
    /// which it does whenever `throw` is set.
    pub async fn unhandled(&self, version: ApiVersion, throw: bool) -> Result<EndpointResponse> {
        self.call(version, paths::GIVE_ME_UNHANDLED_EXCEPTION, &ThrowQuery::new(throw))
            .await
    }

    /// Call any versioned endpoint with a raw query
    ///
    /// # Errors
    /// Returns an error if the request fails or the daemon returns an error.
    pub async fn call(
        &self,
        version: ApiVersion,
        endpoint: &str,
        query: &ThrowQuery,
    ) -> Result<EndpointResponse> {
        let url = self.endpoint_url(version, endpoint, query)?;
        self.get(url).await
    }
}
