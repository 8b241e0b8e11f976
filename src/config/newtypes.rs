//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated Clash of Clans API token.
///
/// Tokens are issued per developer key on the Clash of Clans developer site
/// and sent as `Authorization: Bearer <token>`.
///
/// # Security
///
/// The `Debug` implementation masks the token, displaying only
/// `ApiToken(*****)` instead of the actual value.
///
/// # Example
///
/// ```rust
/// use coc_api::ApiToken;
///
/// let token = ApiToken::new("eyJ0eXAi").unwrap();
/// assert_eq!(token.as_ref(), "eyJ0eXAi");
/// assert_eq!(format!("{:?}", token), "ApiToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    /// Creates a new validated API token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiToken`] if the token is empty or blank.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        let token = token.trim();
        if token.is_empty() {
            return Err(ConfigError::EmptyApiToken);
        }
        Ok(Self(token.to_string()))
    }
}

impl AsRef<str> for ApiToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiToken(*****)")
    }
}

/// A validated base URL for the REST API, e.g. `https://api.clashofclans.com/v1`.
///
/// Trailing slashes are removed so path segments can be appended with a
/// single `/`.
///
/// # Example
///
/// ```rust
/// use coc_api::BaseUrl;
///
/// let url = BaseUrl::new("https://api.clashofclans.com/v1/").unwrap();
/// assert_eq!(url.as_ref(), "https://api.clashofclans.com/v1");
/// assert_eq!(url.scheme(), "https");
/// assert_eq!(url.host_name(), "api.clashofclans.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl {
    url: String,
    scheme_end: usize,
    host_end: usize,
}

impl BaseUrl {
    /// Official Clash of Clans API endpoint.
    pub const DEFAULT: &'static str = "https://api.clashofclans.com/v1";

    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the scheme or host is missing.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();
        let invalid = || ConfigError::InvalidBaseUrl { url: url.clone() };

        let scheme_end = url.find("://").ok_or_else(invalid)?;
        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(invalid());
        }

        let host_start = scheme_end + 3;
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);
        if host_end == host_start || remainder.contains(['?', '#']) {
            return Err(invalid());
        }

        Ok(Self {
            url,
            scheme_end,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.scheme_end + 3..self.host_end]
    }
}

impl Default for BaseUrl {
    fn default() -> Self {
        Self {
            url: Self::DEFAULT.to_string(),
            scheme_end: 5,
            host_end: 28,
        }
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

impl Serialize for BaseUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.url)
    }
}

impl<'de> Deserialize<'de> for BaseUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}
