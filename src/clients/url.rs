//! URL assembly for endpoint paths.

use std::fmt::Display;

use crate::tag::normalize_tag;

/// Builds an endpoint URL from a base and a sequence of path segments.
///
/// Literal segments are appended as given, tag segments go through
/// [`normalize_tag`], and the URL is rendered once by [`UrlBuilder::build`].
///
/// # Example
///
/// ```rust
/// use coc_api::clients::UrlBuilder;
///
/// let url = UrlBuilder::new("https://api.clashofclans.com/v1/")
///     .path("clans")
///     .tag("2PP")
///     .path("members")
///     .build();
/// assert_eq!(url, "https://api.clashofclans.com/v1/clans/%232PP/members");
/// ```
#[derive(Clone, Debug)]
pub struct UrlBuilder {
    base: String,
    segments: Vec<String>,
}

impl UrlBuilder {
    /// Starts a URL at `base`; trailing slashes are dropped.
    #[must_use]
    pub fn new(base: impl AsRef<str>) -> Self {
        Self {
            base: base.as_ref().trim_end_matches('/').to_string(),
            segments: Vec::new(),
        }
    }

    /// Appends a literal path segment.
    #[must_use]
    pub fn path(mut self, segment: impl Into<String>) -> Self {
        self.segments.push(segment.into());
        self
    }

    /// Appends an object tag, adding the `#` marker and percent-encoding it.
    #[must_use]
    pub fn tag(mut self, tag: &str) -> Self {
        self.segments.push(normalize_tag(tag));
        self
    }

    /// Appends a numeric or otherwise URL-safe identifier.
    #[must_use]
    pub fn id(mut self, id: impl Display) -> Self {
        self.segments.push(urlencoding::encode(&id.to_string()).into_owned());
        self
    }

    /// Renders the URL.
    #[must_use]
    pub fn build(&self) -> String {
        let mut url = self.base.clone();
        for segment in &self.segments {
            url.push('/');
            url.push_str(segment);
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://api.example.com/v1";

    #[test]
    fn test_base_only() {
        assert_eq!(UrlBuilder::new(BASE).build(), BASE);
    }

    #[test]
    fn test_tag_segments_with_and_without_marker_agree() {
        let bare = UrlBuilder::new(BASE).path("clans").tag("ABC").path("members").build();
        let marked = UrlBuilder::new(BASE).path("clans").tag("#ABC").path("members").build();
        assert_eq!(bare, "https://api.example.com/v1/clans/%23ABC/members");
        assert_eq!(bare, marked);
    }

    #[test]
    fn test_numeric_id_segment() {
        let url = UrlBuilder::new(BASE)
            .path("locations")
            .id(32_000_006)
            .path("rankings")
            .path("clans")
            .build();
        assert_eq!(url, "https://api.example.com/v1/locations/32000006/rankings/clans");
    }

    #[test]
    fn test_id_segment_is_escaped() {
        let url = UrlBuilder::new(BASE).path("leagues").id("29000022/seasons").build();
        assert_eq!(url, "https://api.example.com/v1/leagues/29000022%2Fseasons");
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let url = UrlBuilder::new("http://localhost:3000/").path("labels").build();
        assert_eq!(url, "http://localhost:3000/labels");
    }
}
