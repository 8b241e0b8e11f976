//! Query-string encoding.
//!
//! Parameters are held in a [`BTreeMap`], so a given set of parameters always
//! encodes to the same string.

use std::collections::BTreeMap;
use std::fmt;

/// Query parameters to append to a request URL.
pub type QueryParams = BTreeMap<String, QueryValue>;

/// A scalar query parameter value.
///
/// Only [`QueryValue::Str`] is percent-encoded. Numbers and booleans are
/// written with their `Display` form, which never contains reserved
/// characters.
///
/// # Example
///
/// ```rust
/// use coc_api::clients::{encode_query, QueryParams, QueryValue};
///
/// let mut params = QueryParams::new();
/// params.insert("name".to_string(), "clash bros".into());
/// params.insert("limit".to_string(), 10.into());
/// assert_eq!(encode_query(&params), "?limit=10&name=clash%20bros");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum QueryValue {
    /// A string value, percent-encoded on output.
    Str(String),
    /// A signed integer.
    Int(i64),
    /// An unsigned integer.
    UInt(u64),
    /// A floating point number.
    Float(f64),
    /// A boolean, rendered as `true`/`false`.
    Bool(bool),
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(&urlencoding::encode(s)),
            Self::Int(n) => write!(f, "{n}"),
            Self::UInt(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<i32> for QueryValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for QueryValue {
    fn from(value: u32) -> Self {
        Self::UInt(u64::from(value))
    }
}

impl From<u64> for QueryValue {
    fn from(value: u64) -> Self {
        Self::UInt(value)
    }
}

impl From<f64> for QueryValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Renders `params` as a query string.
///
/// Returns an empty string when there are no parameters; otherwise `?`
/// precedes the first `name=value` pair and `&` each subsequent one.
#[must_use]
pub fn encode_query(params: &QueryParams) -> String {
    let mut query = String::new();
    for (i, (name, value)) in params.iter().enumerate() {
        query.push(if i == 0 { '?' } else { '&' });
        query.push_str(name);
        query.push('=');
        query.push_str(&value.to_string());
    }
    query
}
