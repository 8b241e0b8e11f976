//! HTTP-specific error types.
//!
//! - [`HttpResponseError`]: the server answered with a status other than 200
//! - [`HttpError`]: unified error type, either a response error or a
//!   transport failure
//!
//! # Example
//!
//! ```rust,ignore
//! use coc_api::clients::HttpError;
//!
//! match client.get(&url, &headers, &params).await {
//!     Ok(body) => println!("{} bytes", body.len()),
//!     Err(HttpError::Response(e)) => println!("HTTP {} {}", e.status_code, e.status),
//!     Err(HttpError::Transport(e)) => println!("Transport error: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when the server responds with a non-200 status.
///
/// The response body is discarded; only the status code and its reason
/// phrase are kept.
///
/// # Example
///
/// ```rust
/// use coc_api::clients::HttpResponseError;
///
/// let error = HttpResponseError::new(404, "Not Found");
/// assert_eq!(error.to_string(), "HTTP error: status=404, reason=Not Found");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("HTTP error: status={status_code}, reason={status}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub status_code: u16,
    /// The reason phrase of the status (e.g., "Not Found").
    pub status: String,
}

impl HttpResponseError {
    /// Creates a new response error.
    #[must_use]
    pub fn new(status_code: u16, status: impl Into<String>) -> Self {
        Self {
            status_code,
            status: status.into(),
        }
    }
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The server responded with a status other than 200.
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// The request could not be completed (DNS, connection, TLS, or body read).
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns the HTTP status code if the server answered at all.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.status_code),
            Self::Transport(_) => None,
        }
    }
}
