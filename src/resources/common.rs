//! Types shared by several resources.

use serde::{Deserialize, Serialize};

/// Implements `Display` as the record's compact JSON form.
macro_rules! impl_json_display {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl std::fmt::Display for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    let json = serde_json::to_string(self).map_err(|_| std::fmt::Error)?;
                    f.write_str(&json)
                }
            }
        )+
    };
}

pub(crate) use impl_json_display;

/// The `{"items": [...]}` envelope wrapping every list response.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Items<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

/// Badge image URLs of a clan.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct BadgeUrls {
    /// Small badge image.
    pub small: String,
    /// Large badge image.
    pub large: String,
    /// Medium badge image.
    pub medium: String,
}

/// Icon image URLs of a league or label.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct IconUrls {
    /// Small icon image.
    pub small: String,
    /// Medium icon image.
    pub medium: String,
    /// Tiny icon image (leagues only).
    #[serde(skip_serializing_if = "String::is_empty")]
    pub tiny: String,
}

impl_json_display!(BadgeUrls, IconUrls);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_envelope_decodes() {
        let json = r#"{"items":[{"small":"s","large":"l","medium":"m"}],"paging":{"cursors":{}}}"#;
        let items: Items<BadgeUrls> = serde_json::from_str(json).unwrap();
        assert_eq!(items.items.len(), 1);
        assert_eq!(items.items[0].medium, "m");
    }

    #[test]
    fn test_items_envelope_defaults_to_empty() {
        let items: Items<BadgeUrls> = serde_json::from_str("{}").unwrap();
        assert!(items.items.is_empty());
    }

    #[test]
    fn test_display_is_compact_json() {
        let urls = IconUrls {
            small: "s".to_string(),
            medium: "m".to_string(),
            tiny: String::new(),
        };
        assert_eq!(urls.to_string(), r#"{"small":"s","medium":"m"}"#);
    }
}
