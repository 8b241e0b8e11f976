//! HTTP client for Clash of Clans API communication.
//!
//! This module provides the [`HttpClient`] type, which issues a single GET
//! per call and classifies the outcome.

use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::headers::{bearer_headers, merge_headers, Headers};
use crate::clients::query::{encode_query, QueryParams};
use crate::config::CocConfig;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the Clash of Clans API.
///
/// The client handles:
/// - Default headers (`Accept`, `User-Agent`, and the bearer token)
/// - Query string encoding
/// - Strict status checking: only `200 OK` counts as success
///
/// There is no retry, no rate limiting and no timeout at this layer. Dropping
/// the returned future cancels the request.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use coc_api::{ApiToken, CocConfig, HttpClient, QueryParams};
///
/// let config = CocConfig::builder()
///     .token(ApiToken::new("my-token")?)
///     .build()?;
/// let client = HttpClient::new(&config)?;
///
/// let url = format!("{}/clans/%232PP", config.base_url());
/// let body = client.get(&url, client.default_headers(), &QueryParams::new()).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Headers sent with every request unless overridden.
    default_headers: Headers,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Transport`] if the underlying reqwest client
    /// cannot be created (e.g., TLS backend initialization failure).
    pub fn new(config: &CocConfig) -> Result<Self, HttpError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}coc-api-rust v{SDK_VERSION}");

        let base = Headers::from([
            ("Accept".to_string(), "application/json".to_string()),
            ("User-Agent".to_string(), user_agent),
        ]);
        let default_headers = merge_headers(&base, &bearer_headers(config.token().as_ref()));

        if config.accept_invalid_certs() {
            tracing::warn!(
                "TLS certificate verification is disabled; the identity of {} will not be checked",
                config.base_url().host_name()
            );
        }

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .danger_accept_invalid_certs(config.accept_invalid_certs())
            .build()?;

        Ok(Self {
            client,
            default_headers,
        })
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &Headers {
        &self.default_headers
    }

    /// Sends a GET request and returns the raw response body.
    ///
    /// `params` are encoded with [`encode_query`] and appended to `url`;
    /// every entry of `headers` is attached to the request.
    ///
    /// # Errors
    ///
    /// - [`HttpError::Response`] if the status is anything but 200, including
    ///   other 2xx codes. The body is not read.
    /// - [`HttpError::Transport`] if the request cannot be sent or the body
    ///   cannot be read.
    pub async fn get(
        &self,
        url: &str,
        headers: &Headers,
        params: &QueryParams,
    ) -> Result<Vec<u8>, HttpError> {
        let target = format!("{url}{}", encode_query(params));
        tracing::debug!("GET {}", url);
        tracing::trace!("url={}", target);

        let mut req_builder = self.client.get(&target);
        for (key, value) in headers {
            req_builder = req_builder.header(key, value);
        }

        let res = req_builder.send().await.map_err(|e| {
            tracing::error!("Failed to send request to {}: {}", url, e);
            e
        })?;

        let status = res.status();
        if status != reqwest::StatusCode::OK {
            tracing::error!(
                "Request to {} failed, statusCode={}, status={}",
                url,
                status.as_u16(),
                status.canonical_reason().unwrap_or_default()
            );
            return Err(HttpError::Response(HttpResponseError::new(
                status.as_u16(),
                status.canonical_reason().unwrap_or_default(),
            )));
        }

        let body = res.bytes().await.map_err(|e| {
            tracing::error!("Failed to read response body from {}: {}", url, e);
            e
        })?;
        tracing::trace!("response body={}", String::from_utf8_lossy(&body));

        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiToken, CocConfig};

    fn create_test_config() -> CocConfig {
        CocConfig::builder()
            .token(ApiToken::new("test-token").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_authorization_header_injection() {
        let client = HttpClient::new(&create_test_config()).unwrap();
        assert_eq!(
            client.default_headers().get("Authorization"),
            Some(&"Bearer test-token".to_string())
        );
    }

    #[test]
    fn test_accept_header_is_json() {
        let client = HttpClient::new(&create_test_config()).unwrap();
        assert_eq!(
            client.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = HttpClient::new(&create_test_config()).unwrap();
        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("coc-api-rust v"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = CocConfig::builder()
            .token(ApiToken::new("test-token").unwrap())
            .user_agent_prefix("ClanBot/1.0")
            .build()
            .unwrap();
        let client = HttpClient::new(&config).unwrap();

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("ClanBot/1.0 | "));
        assert!(user_agent.contains("coc-api-rust"));
    }

    #[test]
    fn test_client_builds_with_invalid_certs_accepted() {
        let config = CocConfig::builder()
            .token(ApiToken::new("test-token").unwrap())
            .accept_invalid_certs(true)
            .build()
            .unwrap();
        assert!(HttpClient::new(&config).is_ok());
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}
