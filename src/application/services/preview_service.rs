//! Link preview orchestration.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::timeout;
use tracing::{debug, info, warn};

use crate::application::services::RedirectResolver;
use crate::domain::clients::{FetchError, MetadataFetcher};
use crate::domain::entities::{LinkPreview, ShortenerDomains};
use crate::utils::target_url::parse_target_url;

/// Default budget for each network stage of a preview.
pub const DEFAULT_PREVIEW_TIMEOUT: Duration = Duration::from_secs(15);

/// Failure kinds of a preview request.
///
/// Every variant carries the URL the client asked for so it can be echoed
/// back in the error body.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PreviewError {
    #[error("invalid URL {original_url}: {reason}")]
    InvalidUrl { original_url: String, reason: String },

    #[error("failed to resolve shortened URL {original_url}: {details}")]
    ResolutionFailed {
        original_url: String,
        details: String,
    },

    #[error("preview request timed out for {original_url}")]
    Timeout { original_url: String },

    #[error("target refused preview of {original_url}")]
    CorsBlocked { original_url: String },

    #[error("invalid preview data for {final_url}: {details}")]
    InvalidMetadata {
        original_url: String,
        final_url: String,
        details: String,
    },

    #[error("failed to fetch preview of {original_url}: {details}")]
    Upstream {
        original_url: String,
        details: String,
    },
}

/// Builds link previews: shortener resolution, then metadata extraction.
///
/// # Flow
///
/// 1. Validate the target URL (HTTP/HTTPS only)
/// 2. If the host is a known shortener, resolve the redirect chain
/// 3. Fetch page metadata from the final URL
/// 4. Normalize into a [`LinkPreview`]
///
/// Steps 2 and 3 each run under `timeout`. A stage that runs out of time is
/// dropped, which cancels its in-flight request.
pub struct PreviewService {
    shorteners: ShortenerDomains,
    resolver: RedirectResolver,
    fetcher: Arc<dyn MetadataFetcher>,
    timeout: Duration,
}

impl PreviewService {
    /// Creates a new preview service.
    pub fn new(
        shorteners: ShortenerDomains,
        resolver: RedirectResolver,
        fetcher: Arc<dyn MetadataFetcher>,
        timeout: Duration,
    ) -> Self {
        Self {
            shorteners,
            resolver,
            fetcher,
            timeout,
        }
    }

    pub fn shorteners(&self) -> &ShortenerDomains {
        &self.shorteners
    }

    pub fn resolver(&self) -> &RedirectResolver {
        &self.resolver
    }

    /// Produces a preview for `original_url`.
    ///
    /// # Errors
    ///
    /// - [`PreviewError::InvalidUrl`] if the input is not an absolute HTTP(S) URL
    /// - [`PreviewError::ResolutionFailed`] if a shortener resolved to something unusable
    /// - [`PreviewError::Timeout`] if resolution or the metadata fetch overran the budget
    /// - [`PreviewError::CorsBlocked`] if the target refused to serve the page
    /// - [`PreviewError::InvalidMetadata`] if the target is not a web page
    /// - [`PreviewError::Upstream`] for any other fetch failure
    pub async fn preview(&self, original_url: &str) -> Result<LinkPreview, PreviewError> {
        parse_target_url(original_url).map_err(|e| PreviewError::InvalidUrl {
            original_url: original_url.to_string(),
            reason: e.to_string(),
        })?;

        let final_url = if self.shorteners.is_shortener(original_url) {
            debug!(url = %original_url, "Detected shortener URL, resolving");
            let resolved = self.resolve_within_budget(original_url).await?;

            parse_target_url(&resolved).map_err(|e| PreviewError::ResolutionFailed {
                original_url: original_url.to_string(),
                details: format!("resolved to unusable URL {}: {}", resolved, e),
            })?;

            resolved
        } else {
            original_url.to_string()
        };

        let metadata = match timeout(self.timeout, self.fetcher.fetch(&final_url)).await {
            Ok(Ok(metadata)) => metadata,
            Ok(Err(e)) => return Err(self.map_fetch_error(e, original_url, &final_url)),
            Err(_) => {
                warn!(url = %final_url, timeout = ?self.timeout, "Metadata fetch timed out");
                return Err(PreviewError::Timeout {
                    original_url: original_url.to_string(),
                });
            }
        };

        let preview = LinkPreview::new(metadata, original_url, &final_url);
        info!(
            original = %preview.original_url,
            final_url = %preview.final_url,
            redirected = preview.was_redirected,
            "Preview generated"
        );

        Ok(preview)
    }

    async fn resolve_within_budget(&self, original_url: &str) -> Result<String, PreviewError> {
        timeout(self.timeout, self.resolver.resolve(original_url))
            .await
            .map_err(|_| {
                warn!(url = %original_url, timeout = ?self.timeout, "URL resolution timed out");
                PreviewError::Timeout {
                    original_url: original_url.to_string(),
                }
            })
    }

    fn map_fetch_error(&self, error: FetchError, original_url: &str, final_url: &str) -> PreviewError {
        warn!(url = %final_url, error = %error, "Preview fetch error");

        let original_url = original_url.to_string();
        match error {
            FetchError::Timeout => PreviewError::Timeout { original_url },
            FetchError::CorsBlocked => PreviewError::CorsBlocked { original_url },
            FetchError::Invalid(details) => PreviewError::InvalidMetadata {
                original_url,
                final_url: final_url.to_string(),
                details,
            },
            FetchError::Upstream(details) => PreviewError::Upstream {
                original_url,
                details,
            },
        }
    }
}
