//! Query parameters for the thread listing endpoint.

use serde::Deserialize;
use serde_with::{DisplayFromStr, serde_as};

/// `GET /api/threads?page=N`
///
/// Uses `serde_with` to parse the page number from the query string.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct ThreadsQuery {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page: Option<u32>,
}

impl ThreadsQuery {
    /// Requested page, defaulting to the first.
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(1)
    }
}
