//! HTTP client for the upstream thread API.

use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::warn;
use url::Url;

use crate::domain::clients::{ThreadSource, ThreadsError};
use crate::domain::entities::{Thread, ThreadPage};

/// Default base URL of the thread API.
pub const DEFAULT_THREADS_API_URL: &str = "https://twitter-api.opensourceprojects.dev";

/// [`ThreadSource`] reading `{base}/threads` and `{base}/threads/{id}`.
#[derive(Clone)]
pub struct HttpThreadSource {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpThreadSource {
    pub fn new(client: reqwest::Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    /// Builds `{base}/{segments...}` without doubling slashes.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ThreadsError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ThreadsError::Upstream("base URL cannot be a base".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub(crate) fn list_url(&self, page: u32) -> Result<Url, ThreadsError> {
        let mut url = self.endpoint(&["threads"])?;
        if page > 1 {
            url.query_pairs_mut().append_pair("page", &page.to_string());
        }
        Ok(url)
    }

    pub(crate) fn conversation_url(&self, id: &str) -> Result<Url, ThreadsError> {
        self.endpoint(&["threads", id])
    }

    async fn get(&self, url: Url) -> Result<reqwest::Response, ThreadsError> {
        let response = self.client.get(url.clone()).send().await.map_err(|e| {
            warn!(url = %url, error = %e, "Thread API unreachable");
            ThreadsError::Upstream(e.to_string())
        })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ThreadsError::NotFound(url.to_string()));
        }
        if !status.is_success() {
            warn!(url = %url, status = status.as_u16(), "Thread API returned an error");
            return Err(ThreadsError::Upstream(format!(
                "thread API responded with {}",
                status
            )));
        }

        Ok(response)
    }
}

#[async_trait]
impl ThreadSource for HttpThreadSource {
    async fn list(&self, page: u32) -> Result<ThreadPage, ThreadsError> {
        let url = self.list_url(page)?;
        self.get(url)
            .await?
            .json::<ThreadPage>()
            .await
            .map_err(|e| ThreadsError::Upstream(e.to_string()))
    }

    async fn conversation(&self, id: &str) -> Result<Vec<Thread>, ThreadsError> {
        let url = self.conversation_url(id)?;
        self.get(url)
            .await
            .map_err(|e| match e {
                ThreadsError::NotFound(_) => ThreadsError::NotFound(id.to_string()),
                other => other,
            })?
            .json::<Vec<Thread>>()
            .await
            .map_err(|e| ThreadsError::Upstream(e.to_string()))
    }
}
