//! Query parameters for the link preview endpoint.

use serde::Deserialize;

/// `GET /api/preview?url=...`
///
/// `url` is optional at the extractor level so a missing parameter can be
/// reported with the API's own error body.
#[derive(Debug, Deserialize)]
pub struct PreviewQuery {
    pub url: Option<String>,
}
