//! Error types for the Clash of Clans API client.
//!
//! This module contains the configuration, decoding and top-level client
//! error types. Transport-level errors live in [`crate::clients`].
//!
//! # Error Handling
//!
//! Every error is returned to the immediate caller. The client never retries,
//! falls back, or returns partial results.
//!
//! # Example
//!
//! ```rust
//! use coc_api::{ApiToken, ConfigError};
//!
//! let result = ApiToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiToken)));
//! ```

use thiserror::Error;

use crate::clients::HttpError;

/// Errors that can occur while building a [`CocConfig`](crate::CocConfig).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API token cannot be empty.
    #[error("API token cannot be empty. Please provide a valid Clash of Clans API token.")]
    EmptyApiToken,

    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Please provide a URL with scheme and host (e.g., 'https://api.clashofclans.com/v1').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// The configuration file exists but could not be read or parsed.
    #[error("Invalid configuration file '{path}': {reason}")]
    InvalidConfigFile {
        /// Path of the offending file.
        path: String,
        /// Why the file was rejected.
        reason: String,
    },
}

/// Errors raised while decoding API payloads.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// A timestamp did not match the `YYYYMMDDThhmmss.mmmZ` layout.
    #[error("Malformed timestamp '{value}'. Expected format: 'YYYYMMDDThhmmss.mmmZ' (e.g., '20230115T093000.000Z').")]
    MalformedTimestamp {
        /// The rejected input.
        value: String,
    },

    /// The response body was not valid JSON for the expected record.
    #[error("Failed to decode response body: {0}")]
    Json(#[from] serde_json::Error),
}

/// Unified error type returned by [`CocClient`](crate::CocClient) endpoint methods.
///
/// # Example
///
/// ```rust,ignore
/// use coc_api::{CocError, HttpError};
///
/// match client.get_current_war("#2PP").await {
///     Ok(war) => println!("{} vs {}", war.clan.name, war.opponent.name),
///     Err(CocError::NotInWar { tag }) => println!("{tag} is not at war"),
///     Err(CocError::Http(HttpError::Response(e))) => println!("HTTP {}", e.status_code),
///     Err(e) => println!("error: {e}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum CocError {
    /// The request failed at the HTTP or transport level.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The response body could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The clan is not currently participating in a war.
    #[error("Clan '{tag}' is not currently in a war.")]
    NotInWar {
        /// Tag of the clan that was queried.
        tag: String,
    },
}

impl From<serde_json::Error> for CocError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(DecodeError::Json(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_api_token_error_message() {
        let message = ConfigError::EmptyApiToken.to_string();
        assert!(message.contains("API token cannot be empty"));
    }

    #[test]
    fn test_invalid_base_url_error_message() {
        let error = ConfigError::InvalidBaseUrl {
            url: "not a url".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("not a url"));
        assert!(message.contains("scheme and host"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField { field: "token" };
        let message = error.to_string();
        assert!(message.contains("token"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_malformed_timestamp_error_mentions_layout() {
        let error = DecodeError::MalformedTimestamp {
            value: "yesterday".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("yesterday"));
        assert!(message.contains("YYYYMMDDThhmmss.mmmZ"));
    }

    #[test]
    fn test_json_error_converts_into_decode_variant() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = CocError::from(json_err);
        assert!(matches!(error, CocError::Decode(DecodeError::Json(_))));
    }

    #[test]
    fn test_error_implements_std_error() {
        let _: &dyn std::error::Error = &ConfigError::EmptyApiToken;
        let _: &dyn std::error::Error = &CocError::NotInWar {
            tag: "#ABC".to_string(),
        };
    }
}
