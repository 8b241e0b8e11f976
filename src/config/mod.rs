//! Configuration types for the Clash of Clans API client.
//!
//! # Overview
//!
//! - [`CocConfig`]: The configuration consumed by the HTTP and endpoint clients
//! - [`CocConfigBuilder`]: A builder for constructing [`CocConfig`] instances
//! - [`ApiToken`]: A validated bearer token with masked debug output
//! - [`BaseUrl`]: A validated API base URL
//!
//! The configuration is constructed once at startup and passed by reference
//! into [`HttpClient::new`](crate::HttpClient::new) or
//! [`CocClient::new`](crate::CocClient::new). Nothing is read from global state.
//!
//! # Example
//!
//! ```rust
//! use coc_api::{ApiToken, CocConfig};
//!
//! let config = CocConfig::builder()
//!     .token(ApiToken::new("my-token").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url().as_ref(), "https://api.clashofclans.com/v1");
//! ```

mod newtypes;

pub use newtypes::{ApiToken, BaseUrl};

use std::io::ErrorKind;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

/// Configuration for the Clash of Clans API client.
///
/// # TLS Verification
///
/// `accept_invalid_certs` disables server certificate validation. The
/// connection stays encrypted, but the server's identity is no longer
/// authenticated, so anyone on the network path can impersonate the API and
/// read the bearer token. It defaults to `false` and should only be enabled
/// against test servers or interception proxies you control.
///
/// # Thread Safety
///
/// `CocConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct CocConfig {
    base_url: BaseUrl,
    token: ApiToken,
    accept_invalid_certs: bool,
    user_agent_prefix: Option<String>,
}

impl CocConfig {
    /// Creates a new builder for constructing a `CocConfig`.
    #[must_use]
    pub fn builder() -> CocConfigBuilder {
        CocConfigBuilder::new()
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the bearer token.
    #[must_use]
    pub const fn token(&self) -> &ApiToken {
        &self.token
    }

    /// Returns whether invalid TLS certificates are accepted.
    #[must_use]
    pub const fn accept_invalid_certs(&self) -> bool {
        self.accept_invalid_certs
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify CocConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CocConfig>();
};

/// On-disk configuration file layout, e.g. `{"base_url": "https://..."}`.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    base_url: Option<BaseUrl>,
}

/// Builder for constructing [`CocConfig`] instances.
///
/// The only required field is `token`.
///
/// # Defaults
///
/// - `base_url`: [`BaseUrl::DEFAULT`]
/// - `accept_invalid_certs`: `false`
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct CocConfigBuilder {
    base_url: Option<BaseUrl>,
    token: Option<ApiToken>,
    accept_invalid_certs: Option<bool>,
    user_agent_prefix: Option<String>,
}

impl CocConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API base URL.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the bearer token (required).
    #[must_use]
    pub fn token(mut self, token: ApiToken) -> Self {
        self.token = Some(token);
        self
    }

    /// Disables TLS certificate validation. See [`CocConfig`] for the risk.
    #[must_use]
    pub const fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = Some(accept);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Applies settings from a JSON configuration file.
    ///
    /// A missing file is not an error: a warning is logged and the current
    /// settings are kept. A `base_url` present in the file replaces the one
    /// set on the builder.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidConfigFile`] if the file exists but
    /// cannot be read or does not contain valid configuration JSON.
    pub fn config_file(mut self, path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let invalid = |reason: String| ConfigError::InvalidConfigFile {
            path: path.display().to_string(),
            reason,
        };

        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::warn!(
                    "Configuration file {} not found, using default settings",
                    path.display()
                );
                return Ok(self);
            }
            Err(e) => return Err(invalid(e.to_string())),
        };

        let file: ConfigFile = serde_json::from_str(&contents).map_err(|e| invalid(e.to_string()))?;
        if let Some(base_url) = file.base_url {
            tracing::debug!("Using base URL {} from {}", base_url, path.display());
            self.base_url = Some(base_url);
        }
        Ok(self)
    }

    /// Builds the [`CocConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `token` is not set.
    pub fn build(self) -> Result<CocConfig, ConfigError> {
        let token = self
            .token
            .ok_or(ConfigError::MissingRequiredField { field: "token" })?;

        Ok(CocConfig {
            base_url: self.base_url.unwrap_or_default(),
            token,
            accept_invalid_certs: self.accept_invalid_certs.unwrap_or(false),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
