//! Client trait for page metadata extraction.

use crate::domain::entities::PageMetadata;
use async_trait::async_trait;

/// Failure kinds of a metadata fetch.
///
/// Each variant is raised explicitly at its failure site and maps to its own
/// HTTP status in the preview endpoint.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("request timed out")]
    Timeout,

    /// The target refused to serve the page to us.
    #[error("target refused the request")]
    CorsBlocked,

    #[error("upstream failure: {0}")]
    Upstream(String),

    /// The response could not be interpreted as a web page.
    #[error("invalid page: {0}")]
    Invalid(String),
}

/// Downloads a page and extracts its title, description and image.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::HtmlMetadataFetcher`] - `reqwest` + meta tag parsing
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MetadataFetcher: Send + Sync {
    /// Fetches metadata for `url`.
    ///
    /// # Errors
    ///
    /// See [`FetchError`] for the failure kinds.
    async fn fetch(&self, url: &str) -> Result<PageMetadata, FetchError>;
}
