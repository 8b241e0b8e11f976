//! Request header sets.

use std::collections::HashMap;

/// HTTP headers to attach to a request, keyed by header name.
pub type Headers = HashMap<String, String>;

/// Merges two header sets into a new one.
///
/// Every entry of `base` is copied, then every entry of `overrides`; on a
/// key collision the value from `overrides` wins. Neither input is modified.
///
/// # Example
///
/// ```rust
/// use coc_api::clients::{merge_headers, Headers};
///
/// let base = Headers::from([("Accept".to_string(), "application/json".to_string())]);
/// let auth = Headers::from([("Authorization".to_string(), "Bearer T".to_string())]);
/// let merged = merge_headers(&base, &auth);
/// assert_eq!(merged.len(), 2);
/// assert_eq!(merged["Authorization"], "Bearer T");
/// ```
#[must_use]
pub fn merge_headers(base: &Headers, overrides: &Headers) -> Headers {
    let mut merged = base.clone();
    for (key, value) in overrides {
        merged.insert(key.clone(), value.clone());
    }
    merged
}

/// Returns the `Authorization: Bearer <token>` header.
#[must_use]
pub fn bearer_headers(token: &str) -> Headers {
    Headers::from([("Authorization".to_string(), format!("Bearer {token}"))])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(pairs: &[(&str, &str)]) -> Headers {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_merge_keeps_entries_from_both_sides() {
        let merged = merge_headers(
            &headers(&[("Accept", "application/json")]),
            &headers(&[("Authorization", "Bearer T")]),
        );
        assert_eq!(merged.get("Accept").map(String::as_str), Some("application/json"));
        assert_eq!(merged.get("Authorization").map(String::as_str), Some("Bearer T"));
    }

    #[test]
    fn test_override_wins_on_collision() {
        let merged = merge_headers(
            &headers(&[("Accept", "text/plain"), ("X-Trace", "1")]),
            &headers(&[("Accept", "application/json")]),
        );
        assert_eq!(merged.len(), 2);
        assert_eq!(merged["Accept"], "application/json");
    }

    #[test]
    fn test_inputs_are_not_mutated() {
        let base = headers(&[("Accept", "application/json")]);
        let overrides = headers(&[("Accept", "text/html"), ("Authorization", "Bearer T")]);
        let _ = merge_headers(&base, &overrides);
        assert_eq!(base, headers(&[("Accept", "application/json")]));
        assert_eq!(overrides.len(), 2);
    }

    #[test]
    fn test_bearer_header_format() {
        assert_eq!(bearer_headers("abc")["Authorization"], "Bearer abc");
    }
}
