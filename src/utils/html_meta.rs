//! Open Graph / Twitter card / HTML metadata extraction.

use crate::domain::entities::PageMetadata;
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;
use url::Url;

static META_TAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<meta\b[^>]*>").unwrap());

static ATTRIBUTE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)([a-z][a-z0-9_:.-]*)\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+))"#).unwrap()
});

static TITLE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<title\b[^>]*>(.*?)</title>").unwrap());

const TITLE_KEYS: &[&str] = &["og:title", "twitter:title"];
const DESCRIPTION_KEYS: &[&str] = &["og:description", "twitter:description", "description"];
const IMAGE_KEYS: &[&str] = &[
    "og:image",
    "og:image:url",
    "og:image:secure_url",
    "twitter:image",
    "twitter:image:src",
];

/// Extracts preview metadata from an HTML document.
///
/// # Lookup Order
///
/// - **title**: `og:title`, `twitter:title`, then `<title>`
/// - **description**: `og:description`, `twitter:description`, then `<meta name="description">`
/// - **image**: `og:image` variants, then `twitter:image`; resolved against `page_url`
///
/// Keys are matched case-insensitively on either the `property` or `name`
/// attribute. The first tag carrying a key wins; a blank value moves on to
/// the next key.
pub fn extract_metadata(html: &str, page_url: &Url) -> PageMetadata {
    let tags = collect_meta_tags(html);

    let lookup = |keys: &[&str]| {
        keys.iter()
            .filter_map(|k| tags.get(*k))
            .map(|v| decode_entities(v))
            .find(|v| !v.trim().is_empty())
    };

    let title = lookup(TITLE_KEYS).or_else(|| {
        TITLE_REGEX
            .captures(html)
            .and_then(|c| c.get(1))
            .map(|m| decode_entities(m.as_str().trim()))
            .filter(|t| !t.is_empty())
    });

    let description = lookup(DESCRIPTION_KEYS);

    let image = lookup(IMAGE_KEYS).map(|raw| {
        let raw = raw.trim();
        page_url
            .join(raw)
            .map(String::from)
            .unwrap_or_else(|_| raw.to_string())
    });

    PageMetadata {
        title,
        description,
        image,
    }
}

/// Maps lowercased `property`/`name` keys to their `content` values.
fn collect_meta_tags(html: &str) -> HashMap<String, String> {
    let mut tags = HashMap::new();

    for tag in META_TAG_REGEX.find_iter(html) {
        let mut key = None;
        let mut content = None;

        for attr in ATTRIBUTE_REGEX.captures_iter(tag.as_str()) {
            let name = attr[1].to_ascii_lowercase();
            let value = attr
                .get(2)
                .or_else(|| attr.get(3))
                .or_else(|| attr.get(4))
                .map(|m| m.as_str().to_string())
                .unwrap_or_default();

            match name.as_str() {
                "property" | "name" if key.is_none() => key = Some(value.to_ascii_lowercase()),
                "content" => content = Some(value),
                _ => {}
            }
        }

        if let (Some(key), Some(content)) = (key, content) {
            tags.entry(key).or_insert(content);
        }
    }

    tags
}

/// Decodes the handful of entities that routinely appear in meta content.
pub fn decode_entities(input: &str) -> String {
    if !input.contains('&') {
        return input.to_string();
    }

    input
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#x27;", "'")
        .replace("&apos;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Url {
        Url::parse("https://example.com/blog/post").unwrap()
    }

    #[test]
    fn test_open_graph_tags() {
        let html = r#"
            <html><head>
              <title>Fallback</title>
              <meta property="og:title" content="OG Title">
              <meta property="og:description" content="OG Description">
              <meta property="og:image" content="https://cdn.example.com/cover.png">
            </head></html>
        "#;

        let meta = extract_metadata(html, &page());

        assert_eq!(meta.title.as_deref(), Some("OG Title"));
        assert_eq!(meta.description.as_deref(), Some("OG Description"));
        assert_eq!(
            meta.image.as_deref(),
            Some("https://cdn.example.com/cover.png")
        );
    }

    #[test]
    fn test_twitter_fallback() {
        let html = r#"
            <meta name="twitter:title" content="Tweet Title" />
            <meta name="twitter:description" content="Tweet Description" />
            <meta name="twitter:image" content="/img/card.jpg" />
        "#;

        let meta = extract_metadata(html, &page());

        assert_eq!(meta.title.as_deref(), Some("Tweet Title"));
        assert_eq!(meta.description.as_deref(), Some("Tweet Description"));
        assert_eq!(
            meta.image.as_deref(),
            Some("https://example.com/img/card.jpg")
        );
    }

    #[test]
    fn test_title_tag_and_meta_description() {
        let html = r#"
            <head>
              <TITLE> Plain &amp; Simple </TITLE>
              <meta name="Description" content="Described here">
            </head>
        "#;

        let meta = extract_metadata(html, &page());

        assert_eq!(meta.title.as_deref(), Some("Plain & Simple"));
        assert_eq!(meta.description.as_deref(), Some("Described here"));
        assert_eq!(meta.image, None);
    }

    #[test]
    fn test_content_before_property_and_single_quotes() {
        let html = "<meta content='Reordered' property='og:title'>";

        let meta = extract_metadata(html, &page());

        assert_eq!(meta.title.as_deref(), Some("Reordered"));
    }

    #[test]
    fn test_relative_image_resolved_against_page() {
        let html = r#"<meta property="og:image" content="cover.png">"#;

        let meta = extract_metadata(html, &page());

        assert_eq!(
            meta.image.as_deref(),
            Some("https://example.com/blog/cover.png")
        );
    }

    #[test]
    fn test_first_tag_wins() {
        let html = r#"
            <meta property="og:title" content="First">
            <meta property="og:title" content="Second">
        "#;

        let meta = extract_metadata(html, &page());

        assert_eq!(meta.title.as_deref(), Some("First"));
    }

    #[test]
    fn test_blank_og_title_falls_back() {
        let html = r#"
            <meta property="og:title" content="  ">
            <title>Real</title>
        "#;

        let meta = extract_metadata(html, &page());

        assert_eq!(meta.title.as_deref(), Some("Real"));
    }

    #[test]
    fn test_blank_open_graph_tags_fall_back_to_twitter() {
        let html = r#"
            <title>Doc</title>
            <meta property="og:title" content="">
            <meta name="twitter:title" content="Tweet">
            <meta property="og:description" content=" ">
            <meta name="twitter:description" content="Card text">
            <meta property="og:image" content="">
            <meta name="twitter:image" content="/card.png">
        "#;

        let meta = extract_metadata(html, &page());

        assert_eq!(meta.title.as_deref(), Some("Tweet"));
        assert_eq!(meta.description.as_deref(), Some("Card text"));
        assert_eq!(meta.image.as_deref(), Some("https://example.com/card.png"));
    }

    #[test]
    fn test_empty_document() {
        let meta = extract_metadata("", &page());
        assert_eq!(meta, PageMetadata::default());
    }

    #[test]
    fn test_decode_entities() {
        assert_eq!(
            decode_entities("Tom &amp; Jerry &quot;live&quot; &lt;3 it&#39;s"),
            "Tom & Jerry \"live\" <3 it's"
        );
        assert_eq!(decode_entities("&amp;lt;"), "&lt;");
        assert_eq!(decode_entities("no entities"), "no entities");
    }
}
