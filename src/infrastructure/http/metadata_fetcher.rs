//! HTML page metadata fetcher.

use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::header::{ACCEPT, CONTENT_TYPE};

use crate::domain::clients::{FetchError, MetadataFetcher};
use crate::domain::entities::PageMetadata;
use crate::utils::html_meta::extract_metadata;

/// Largest body inspected for meta tags.
const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// [`MetadataFetcher`] that downloads the page and parses its meta tags.
///
/// Redirects are followed by the client (up to 10). Error kinds:
///
/// - client timeout → [`FetchError::Timeout`]
/// - `403 Forbidden` → [`FetchError::CorsBlocked`]
/// - other non-2xx, connection errors → [`FetchError::Upstream`]
/// - non-HTML content type → [`FetchError::Invalid`]
#[derive(Clone)]
pub struct HtmlMetadataFetcher {
    client: reqwest::Client,
}

impl HtmlMetadataFetcher {
    /// Builds a fetcher that identifies itself with `user_agent`.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new(user_agent: &str) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().user_agent(user_agent).build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl MetadataFetcher for HtmlMetadataFetcher {
    async fn fetch(&self, url: &str) -> Result<PageMetadata, FetchError> {
        let mut response = self
            .client
            .get(url)
            .header(ACCEPT, "text/html,application/xhtml+xml")
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if status == StatusCode::FORBIDDEN {
            return Err(FetchError::CorsBlocked);
        }
        if !status.is_success() {
            return Err(FetchError::Upstream(format!(
                "target responded with {}",
                status
            )));
        }

        if let Some(content_type) = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            && !content_type.to_ascii_lowercase().contains("html")
        {
            return Err(FetchError::Invalid(format!(
                "unsupported content type {}",
                content_type
            )));
        }

        let page_url = response.url().clone();

        let mut body = Vec::new();
        while let Some(chunk) = response.chunk().await.map_err(map_reqwest_error)? {
            let remaining = MAX_BODY_BYTES - body.len();
            body.extend_from_slice(&chunk[..chunk.len().min(remaining)]);
            if body.len() >= MAX_BODY_BYTES {
                break;
            }
        }

        let html = String::from_utf8_lossy(&body);
        Ok(extract_metadata(&html, &page_url))
    }
}

fn map_reqwest_error(error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout
    } else {
        FetchError::Upstream(error.to_string())
    }
}

