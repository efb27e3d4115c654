//! Core GlobalIdentity client implementation.

use crate::error::{ClientError, Result};
use reqwest::{Client as HttpClient, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// A client for interacting with the GlobalIdentity API.
///
/// # Example
///
/// ```no_run
/// use globalidentity_client::Client;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = Client::new("https://identity.example.com", "my-application-key")?;
///
/// let auth = client.authenticate_user("user@example.com", "hunter2", None).await?;
/// println!("token: {}", auth.token);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    /// Base URL of the GlobalIdentity host.
    base_url: String,
    /// HTTP client.
    http: HttpClient,
    /// Application key sent with every operation.
    application_key: String,
    /// Optional API key for the management endpoints.
    api_key: Option<String>,
}

impl Client {
    /// Create a new GlobalIdentity client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL of the GlobalIdentity host
    ///   (e.g., "https://identity.example.com")
    /// * `application_key` - Application key issued for the calling application
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the HTTP client cannot be
    /// created.
    pub fn new(base_url: impl Into<String>, application_key: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();

        // Validate URL format
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ClientError::InvalidUrl(format!(
                "URL must start with http:// or https://, got: {}",
                base_url
            )));
        }

        let http = HttpClient::builder().timeout(DEFAULT_TIMEOUT).build()?;

        Ok(Self {
            base_url,
            http,
            application_key: application_key.into(),
            api_key: None,
        })
    }

    /// Set an API key for the management endpoints.
    ///
    /// The API key is sent in the `Authorization` header as `Bearer <key>`.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set a custom timeout for all requests.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be rebuilt.
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self> {
        self.http = HttpClient::builder().timeout(timeout).build()?;
        Ok(self)
    }

    /// Application key this client was created with.
    pub(crate) fn application_key(&self) -> &str {
        &self.application_key
    }

    /// Build a full URL from a path.
    fn url(&self, path: &str) -> String {
        let path = path.strip_prefix('/').unwrap_or(path);
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Add authentication headers to a request.
    fn with_auth(&self, builder: RequestBuilder) -> RequestBuilder {
        if let Some(ref key) = self.api_key {
            builder.header("Authorization", format!("Bearer {}", key))
        } else {
            builder
        }
    }

    /// Execute a GET request.
    pub(crate) async fn get(&self, path: &str) -> Result<Response> {
        let url = self.url(path);
        debug!(%url, "GET");
        let request = self.with_auth(self.http.get(&url));

        request.send().await.map_err(ClientError::Http)
    }

    /// Execute a POST request with a JSON body.
    pub(crate) async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        let url = self.url(path);
        debug!(%url, "POST");
        let request = self.with_auth(self.http.post(&url)).json(body);

        request.send().await.map_err(ClientError::Http)
    }

    /// Handle a response: gate on the HTTP status, then deserialize JSON.
    pub(crate) async fn handle_response<T: DeserializeOwned>(
        &self,
        response: Response,
    ) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await.map_err(ClientError::Http)?;
        serde_json::from_str(&body).map_err(ClientError::Deserialize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_new() {
        let client = Client::new("http://localhost:8080", "app-key").unwrap();
        assert_eq!(client.base_url, "http://localhost:8080");
        assert_eq!(client.application_key, "app-key");
        assert!(client.api_key.is_none());
    }

    #[test]
    fn test_client_with_api_key() {
        let client = Client::new("http://localhost:8080", "app-key")
            .unwrap()
            .with_api_key("test-key");
        assert_eq!(client.api_key, Some("test-key".to_string()));
    }

    #[test]
    fn test_client_invalid_url() {
        let result = Client::new("not-a-url", "app-key");
        assert!(result.is_err());
    }

    #[test]
    fn test_url_building() {
        let client = Client::new("http://localhost:8080", "app-key").unwrap();
        assert_eq!(
            client.url("api/authorization/authenticate"),
            "http://localhost:8080/api/authorization/authenticate"
        );
        assert_eq!(
            client.url("/api/authorization/authenticate"),
            "http://localhost:8080/api/authorization/authenticate"
        );
    }

    #[test]
    fn test_url_building_with_trailing_slash() {
        let client = Client::new("http://localhost:8080/", "app-key").unwrap();
        assert_eq!(
            client.url("api/authorization/renewtoken"),
            "http://localhost:8080/api/authorization/renewtoken"
        );
    }
}
