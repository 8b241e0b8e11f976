//! # Clash of Clans API Rust Client
//!
//! A typed client for the Clash of Clans REST API: authenticated requests,
//! query-parameter encoding, JSON decoding into typed records, and classified
//! HTTP/transport errors.
//!
//! ## Overview
//!
//! This crate provides:
//! - Explicit configuration via [`CocConfig`] and [`CocConfigBuilder`]
//! - Validated newtypes for the API token and base URL
//! - Tag normalization for URL path segments via [`normalize_tag`]
//! - The compact `YYYYMMDDThhmmss.mmmZ` timestamp codec [`CocTime`]
//! - A generic async GET client, [`HttpClient`], with strict `200 OK` checking
//! - One method per endpoint on [`CocClient`], returning the records in [`resources`]
//!
//! ## Quick Start
//!
//! ```rust
//! use coc_api::{ApiToken, CocConfig};
//!
//! let config = CocConfig::builder()
//!     .token(ApiToken::new("your-api-token").unwrap())
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use coc_api::{ApiToken, CocClient, CocConfig, QueryParams};
//!
//! let config = CocConfig::builder()
//!     .token(ApiToken::new("your-api-token")?)
//!     .build()?;
//! let client = CocClient::new(&config)?;
//!
//! // Tags may be given with or without the leading '#'
//! let clan = client.get_clan("2PP").await?;
//!
//! let mut params = QueryParams::new();
//! params.insert("name".to_string(), "clash bros".into());
//! params.insert("limit".to_string(), 10.into());
//! let clans = client.search_clans(&params).await?;
//! ```
//!
//! ## Security
//!
//! TLS certificates are verified by default. [`CocConfigBuilder::accept_invalid_certs`]
//! turns verification off, which leaves the channel encrypted but the server
//! unauthenticated; use it only against servers you control.
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All client types are `Send + Sync`
//! - **No hidden policy**: No caching, retries, rate limiting or pagination

pub mod client;
pub mod clients;
pub mod config;
pub mod error;
pub mod resources;
pub mod tag;
pub mod time;

// Re-export public types at crate root for convenience
pub use client::CocClient;
pub use config::{ApiToken, BaseUrl, CocConfig, CocConfigBuilder};
pub use error::{CocError, ConfigError, DecodeError};
pub use tag::normalize_tag;
pub use time::CocTime;

// Re-export HTTP client types
pub use clients::{
    encode_query, merge_headers, Headers, HttpClient, HttpError, HttpResponseError, QueryParams,
    QueryValue, UrlBuilder,
};
