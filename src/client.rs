//! Endpoint client for the Clash of Clans API.
//!
//! [`CocClient`] pairs an [`HttpClient`] with the configured base URL and
//! exposes one method per endpoint. The methods themselves live next to the
//! records they return, in [`crate::resources`].

use serde::de::DeserializeOwned;

use crate::clients::{HttpClient, QueryParams, UrlBuilder};
use crate::config::CocConfig;
use crate::error::CocError;
use crate::resources::common::Items;

/// Typed client for the Clash of Clans REST API.
///
/// # Thread Safety
///
/// `CocClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use coc_api::{ApiToken, CocClient, CocConfig};
///
/// let config = CocConfig::builder()
///     .config_file("./conf/config.json")?
///     .token(ApiToken::new(std::env::var("COC_TOKEN")?)?)
///     .build()?;
/// let client = CocClient::new(&config)?;
///
/// let clan = client.get_clan("#2PP").await?;
/// println!("{} (level {})", clan.name, clan.clan_level);
/// ```
#[derive(Debug)]
pub struct CocClient {
    http_client: HttpClient,
    base_url: String,
}

// Verify CocClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CocClient>();
};

impl CocClient {
    /// Creates a new client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CocError::Http`] if the underlying HTTP client cannot be built.
    pub fn new(config: &CocConfig) -> Result<Self, CocError> {
        let http_client = HttpClient::new(config)?;
        Ok(Self {
            http_client,
            base_url: config.base_url().to_string(),
        })
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Returns the base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Starts a URL below the configured base.
    pub(crate) fn url(&self) -> UrlBuilder {
        UrlBuilder::new(&self.base_url)
    }

    /// GETs `url` and decodes the body as `T`.
    pub(crate) async fn fetch<T: DeserializeOwned>(
        &self,
        url: &UrlBuilder,
        params: &QueryParams,
    ) -> Result<T, CocError> {
        let url = url.build();
        let body = self
            .http_client
            .get(&url, self.http_client.default_headers(), params)
            .await?;
        serde_json::from_slice(&body).map_err(|e| {
            tracing::debug!("Failed to parse the JSON response from {}: {}", url, e);
            CocError::from(e)
        })
    }

    /// GETs `url` and unwraps the `items` envelope of a list response.
    pub(crate) async fn fetch_items<T: DeserializeOwned>(
        &self,
        url: &UrlBuilder,
        params: &QueryParams,
    ) -> Result<Vec<T>, CocError> {
        let envelope: Items<T> = self.fetch(url, params).await?;
        Ok(envelope.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiToken, BaseUrl};

    #[test]
    fn test_client_uses_configured_base_url() {
        let config = CocConfig::builder()
            .token(ApiToken::new("token").unwrap())
            .base_url(BaseUrl::new("http://localhost:9000/v1/").unwrap())
            .build()
            .unwrap();
        let client = CocClient::new(&config).unwrap();

        assert_eq!(client.base_url(), "http://localhost:9000/v1");
        assert_eq!(
            client.url().path("clans").tag("ABC").build(),
            "http://localhost:9000/v1/clans/%23ABC"
        );
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CocClient>();
    }
}
