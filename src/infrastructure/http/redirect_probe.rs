//! HEAD-request redirect probe.

use async_trait::async_trait;
use reqwest::header::LOCATION;
use reqwest::redirect::Policy;

use crate::domain::clients::{ProbeError, ProbeResponse, RedirectProbe};

/// [`RedirectProbe`] backed by a `reqwest` client that never follows redirects.
///
/// No per-request timeout is set here; the caller bounds the whole chain.
#[derive(Clone)]
pub struct ReqwestRedirectProbe {
    client: reqwest::Client,
}

impl ReqwestRedirectProbe {
    /// Builds a probe that identifies itself with `user_agent`.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new(user_agent: &str) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .redirect(Policy::none())
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl RedirectProbe for ReqwestRedirectProbe {
    async fn head(&self, url: &str) -> Result<ProbeResponse, ProbeError> {
        let response = self
            .client
            .head(url)
            .send()
            .await
            .map_err(|e| ProbeError::Transport(e.to_string()))?;

        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        Ok(ProbeResponse {
            status: response.status().as_u16(),
            location,
        })
    }
}
