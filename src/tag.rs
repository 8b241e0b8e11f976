//! Tag normalization for URL path segments and query strings.
//!
//! Clash of Clans identifies clans, players and wars by tags such as `#2PP`.
//! The leading `#` is mandatory in API paths, so it must be added when the
//! caller omits it and then percent-encoded together with the rest of the tag.

/// Leading marker character of every object tag.
pub const TAG_MARKER: char = '#';

/// Normalizes a tag into the percent-encoded form used by the API.
///
/// An empty tag is returned unchanged. A tag without the leading `#` gets one
/// prepended. The result is safe to embed in a path segment or a query
/// string.
///
/// # Example
///
/// ```rust
/// use coc_api::normalize_tag;
///
/// assert_eq!(normalize_tag("#2PP"), "%232PP");
/// assert_eq!(normalize_tag("2PP"), "%232PP");
/// assert_eq!(normalize_tag(""), "");
/// ```
#[must_use]
pub fn normalize_tag(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    if raw.starts_with(TAG_MARKER) {
        urlencoding::encode(raw).into_owned()
    } else {
        urlencoding::encode(&format!("{TAG_MARKER}{raw}")).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tag_is_unchanged() {
        assert_eq!(normalize_tag(""), "");
    }

    #[test]
    fn test_marker_is_added_when_missing() {
        assert_eq!(normalize_tag("ABC123"), "%23ABC123");
    }

    #[test]
    fn test_marked_tag_is_encoded_as_is() {
        assert_eq!(normalize_tag("#ABC123"), "%23ABC123");
    }

    #[test]
    fn test_with_and_without_marker_agree() {
        for tag in ["2PP", "QL9V8Y", "8YJ2L0G", "a b/c?d"] {
            assert_eq!(normalize_tag(tag), normalize_tag(&format!("#{tag}")));
        }
    }

    #[test]
    fn test_reserved_characters_are_escaped() {
        let normalized = normalize_tag("A/B?C&D=E");
        assert_eq!(normalized, "%23A%2FB%3FC%26D%3DE");
        assert!(!normalized.contains(['#', '/', '?', '&', '=']));
    }

    #[test]
    fn test_lone_marker_is_encoded() {
        assert_eq!(normalize_tag("#"), "%23");
    }

    #[test]
    fn test_unreserved_characters_pass_through() {
        assert_eq!(normalize_tag("a-b_c.d~e"), "%23a-b_c.d~e");
    }
}
