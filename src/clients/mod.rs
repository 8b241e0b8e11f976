//! HTTP client types for Clash of Clans API communication.
//!
//! This module provides the generic request/response layer that every
//! endpoint method in [`CocClient`](crate::CocClient) is built on.
//!
//! # Overview
//!
//! - [`HttpClient`]: The async HTTP client; one `get` call, one request
//! - [`HttpError`]: Either a non-200 [`HttpResponseError`] or a transport failure
//! - [`QueryParams`] / [`QueryValue`] / [`encode_query`]: Query string encoding
//! - [`Headers`] / [`merge_headers`]: Header sets and override merging
//! - [`UrlBuilder`]: Path assembly with tag normalization
//!
//! # Example
//!
//! ```rust,ignore
//! use coc_api::clients::{HttpClient, QueryParams, UrlBuilder};
//! use coc_api::{ApiToken, CocConfig};
//!
//! let config = CocConfig::builder()
//!     .token(ApiToken::new("my-token")?)
//!     .build()?;
//! let client = HttpClient::new(&config)?;
//!
//! let url = UrlBuilder::new(config.base_url()).path("clans").tag("2PP").build();
//! let body = client.get(&url, client.default_headers(), &QueryParams::new()).await?;
//! let clan: serde_json::Value = serde_json::from_slice(&body)?;
//! ```

mod errors;
mod headers;
mod http_client;
mod query;
mod url;

pub use errors::{HttpError, HttpResponseError};
pub use headers::{bearer_headers, merge_headers, Headers};
pub use http_client::{HttpClient, SDK_VERSION};
pub use query::{encode_query, QueryParams, QueryValue};
pub use url::UrlBuilder;
