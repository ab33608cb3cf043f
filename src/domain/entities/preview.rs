//! Link preview entities.

use serde::Serialize;
use url::Url;

/// Raw metadata scraped from a page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageMetadata {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

/// Normalized preview returned to clients.
///
/// Serialized with camelCase keys:
///
/// ```json
/// {
///   "title": "Example",
///   "description": null,
///   "image": "https://example.com/cover.png",
///   "originalUrl": "https://bit.ly/xyz",
///   "finalUrl": "https://example.com/article",
///   "hostname": "example.com",
///   "wasRedirected": true
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkPreview {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub original_url: String,
    pub final_url: String,
    pub hostname: String,
    pub was_redirected: bool,
}

impl LinkPreview {
    /// Builds a preview from scraped metadata.
    ///
    /// Title and description are trimmed; blank values become `None`.
    /// `was_redirected` is a plain string comparison of the two URLs.
    pub fn new(metadata: PageMetadata, original_url: &str, final_url: &str) -> Self {
        let hostname = Url::parse(final_url)
            .ok()
            .and_then(|u| u.host_str().map(str::to_string))
            .unwrap_or_default();

        Self {
            title: non_blank(metadata.title),
            description: non_blank(metadata.description),
            image: metadata.image.filter(|i| !i.is_empty()),
            original_url: original_url.to_string(),
            final_url: final_url.to_string(),
            hostname,
            was_redirected: original_url != final_url,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(title: &str, description: &str, image: &str) -> PageMetadata {
        PageMetadata {
            title: Some(title.to_string()),
            description: Some(description.to_string()),
            image: Some(image.to_string()),
        }
    }

    #[test]
    fn test_redirected_preview() {
        let preview = LinkPreview::new(
            metadata("Article", "About things", "https://example.com/a.png"),
            "https://bit.ly/xyz",
            "https://example.com/article",
        );

        assert!(preview.was_redirected);
        assert_eq!(preview.hostname, "example.com");
        assert_eq!(preview.final_url, "https://example.com/article");
        assert_eq!(preview.original_url, "https://bit.ly/xyz");
    }

    #[test]
    fn test_same_url_is_not_redirected() {
        let preview = LinkPreview::new(
            PageMetadata::default(),
            "https://example.com",
            "https://example.com",
        );

        assert!(!preview.was_redirected);
    }

    #[test]
    fn test_blank_fields_become_none() {
        let preview = LinkPreview::new(
            metadata("   ", "", ""),
            "https://example.com/",
            "https://example.com/",
        );

        assert_eq!(preview.title, None);
        assert_eq!(preview.description, None);
        assert_eq!(preview.image, None);
    }

    #[test]
    fn test_fields_are_trimmed() {
        let preview = LinkPreview::new(
            metadata("  Title \n", "\tDescription ", "https://example.com/i.png"),
            "https://example.com/",
            "https://example.com/",
        );

        assert_eq!(preview.title.as_deref(), Some("Title"));
        assert_eq!(preview.description.as_deref(), Some("Description"));
    }

    #[test]
    fn test_serializes_camel_case() {
        let preview = LinkPreview::new(
            PageMetadata::default(),
            "https://example.com/",
            "https://example.com/",
        );

        let json = serde_json::to_value(&preview).unwrap();
        assert!(json.get("originalUrl").is_some());
        assert!(json.get("finalUrl").is_some());
        assert!(json.get("wasRedirected").is_some());
        assert!(json["title"].is_null());
    }
}
