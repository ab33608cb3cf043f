//! Client trait for the upstream thread API.

use crate::domain::entities::{Thread, ThreadPage};
use async_trait::async_trait;

/// Errors raised while reading threads.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ThreadsError {
    #[error("page must be greater than 0")]
    InvalidPage,

    #[error("thread not found: {0}")]
    NotFound(String),

    #[error("thread API failure: {0}")]
    Upstream(String),
}

/// Read-only access to curated threads.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::HttpThreadSource`] - JSON over HTTP
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ThreadSource: Send + Sync {
    /// Fetches one page of threads (1-based).
    async fn list(&self, page: u32) -> Result<ThreadPage, ThreadsError>;

    /// Fetches every post of a conversation, main post first.
    ///
    /// # Errors
    ///
    /// Returns [`ThreadsError::NotFound`] when upstream does not know `id`.
    async fn conversation(&self, id: &str) -> Result<Vec<Thread>, ThreadsError>;
}
