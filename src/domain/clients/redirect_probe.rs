//! Client trait for observing a single redirect hop.

use async_trait::async_trait;

/// Raw answer to a HEAD request, before any redirect is followed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResponse {
    pub status: u16,
    /// Value of the `Location` header, if any.
    pub location: Option<String>,
}

impl ProbeResponse {
    /// Shorthand for a redirect response.
    pub fn redirect(status: u16, location: impl Into<String>) -> Self {
        Self {
            status,
            location: Some(location.into()),
        }
    }

    /// Shorthand for a response without a `Location` header.
    pub fn status(status: u16) -> Self {
        Self {
            status,
            location: None,
        }
    }

    /// Returns `true` for any 3xx status.
    pub fn is_redirect(&self) -> bool {
        (300..400).contains(&self.status)
    }
}

/// Errors raised while probing a URL.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("request failed: {0}")]
    Transport(String),
}

/// Issues one HEAD request with redirect following disabled.
///
/// Implementations must report 3xx responses as-is so the caller can walk
/// the chain itself.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::ReqwestRedirectProbe`] - `reqwest` with `Policy::none()`
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RedirectProbe: Send + Sync {
    /// Sends `HEAD url` and returns the status and `Location` header.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError::Transport`] on connection, TLS or protocol errors.
    async fn head(&self, url: &str) -> Result<ProbeResponse, ProbeError>;
}
