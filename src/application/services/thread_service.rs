//! Curated thread listing and detail service.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::clients::{ThreadSource, ThreadsError};
use crate::domain::entities::{Conversation, Pagination, ThreadSummary};
use crate::utils::page_window::{PageLink, page_window};

/// One page of enriched threads plus navigation controls.
#[derive(Debug, Clone, Serialize)]
pub struct ThreadListing {
    pub threads: Vec<ThreadSummary>,
    pub pagination: Option<Pagination>,
    pub pages: Vec<PageLink>,
}

/// Reads threads from the upstream API and enriches them for display.
pub struct ThreadService {
    source: Arc<dyn ThreadSource>,
}

impl ThreadService {
    /// Creates a new thread service.
    pub fn new(source: Arc<dyn ThreadSource>) -> Self {
        Self { source }
    }

    /// Lists page `page` (1-based) of threads.
    ///
    /// # Errors
    ///
    /// Returns [`ThreadsError::InvalidPage`] for page 0 without calling
    /// upstream, and propagates upstream failures.
    pub async fn list(&self, page: u32) -> Result<ThreadListing, ThreadsError> {
        if page == 0 {
            return Err(ThreadsError::InvalidPage);
        }

        let result = self.source.list(page).await?;
        let pages = result
            .pagination
            .as_ref()
            .map(page_window)
            .unwrap_or_default();

        Ok(ThreadListing {
            threads: result.threads.into_iter().map(ThreadSummary::from).collect(),
            pagination: result.pagination,
            pages,
        })
    }

    /// Loads every post of the conversation `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ThreadsError::NotFound`] if the id is blank, unknown upstream,
    /// or the conversation has no posts.
    pub async fn conversation(&self, id: &str) -> Result<Conversation, ThreadsError> {
        let id = id.trim();
        if id.is_empty() {
            return Err(ThreadsError::NotFound(id.to_string()));
        }

        let posts = self.source.conversation(id).await?;
        if posts.is_empty() {
            return Err(ThreadsError::NotFound(id.to_string()));
        }

        Ok(Conversation::from_posts(posts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::clients::MockThreadSource;
    use crate::domain::entities::{Thread, ThreadPage};
    use serde_json::json;

    fn threads() -> Vec<Thread> {
        serde_json::from_value(json!([
            { "id": 1, "content": "A CLI for things", "username": "alice",
              "github_repo": "https://github.com/alice/things" },
            { "id": 2, "content": "Another project", "username": "bob" }
        ]))
        .unwrap()
    }

    #[tokio::test]
    async fn test_list_enriches_threads() {
        let mut source = MockThreadSource::new();
        source
            .expect_list()
            .withf(|page| *page == 2)
            .times(1)
            .returning(|_| {
                Ok(ThreadPage {
                    threads: threads(),
                    pagination: Some(Pagination {
                        current_page: 2,
                        total_pages: 3,
                        has_previous: true,
                        has_next: true,
                    }),
                })
            });

        let listing = ThreadService::new(Arc::new(source)).list(2).await.unwrap();

        assert_eq!(listing.threads.len(), 2);
        assert_eq!(listing.threads[0].repo_name.as_deref(), Some("alice/things"));
        assert_eq!(listing.threads[1].title, "Another project");
        assert_eq!(listing.pages.first(), Some(&PageLink::Previous { page: 1 }));
        assert_eq!(listing.pages.last(), Some(&PageLink::Next { page: 3 }));
    }

    #[tokio::test]
    async fn test_list_without_pagination() {
        let mut source = MockThreadSource::new();
        source.expect_list().times(1).returning(|_| {
            Ok(ThreadPage {
                threads: Vec::new(),
                pagination: None,
            })
        });

        let listing = ThreadService::new(Arc::new(source)).list(1).await.unwrap();

        assert!(listing.threads.is_empty());
        assert!(listing.pages.is_empty());
    }

    #[tokio::test]
    async fn test_page_zero_is_rejected() {
        let mut source = MockThreadSource::new();
        source.expect_list().times(0);

        let result = ThreadService::new(Arc::new(source)).list(0).await;

        assert!(matches!(result, Err(ThreadsError::InvalidPage)));
    }

    #[tokio::test]
    async fn test_conversation() {
        let mut source = MockThreadSource::new();
        source
            .expect_conversation()
            .withf(|id| id == "123")
            .times(1)
            .returning(|_| Ok(threads()));

        let conversation = ThreadService::new(Arc::new(source))
            .conversation("123")
            .await
            .unwrap();

        assert_eq!(conversation.title, "A CLI for things");
        assert_eq!(conversation.participants, vec!["alice", "bob"]);
        assert!(conversation.posts[0].is_main);
    }

    #[tokio::test]
    async fn test_empty_conversation_is_not_found() {
        let mut source = MockThreadSource::new();
        source
            .expect_conversation()
            .times(1)
            .returning(|_| Ok(Vec::new()));

        let result = ThreadService::new(Arc::new(source)).conversation("9").await;

        assert!(matches!(result, Err(ThreadsError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_upstream_error_is_propagated() {
        let mut source = MockThreadSource::new();
        source
            .expect_conversation()
            .times(1)
            .returning(|_| Err(ThreadsError::Upstream("503".to_string())));

        let result = ThreadService::new(Arc::new(source)).conversation("9").await;

        assert_eq!(result.unwrap_err(), ThreadsError::Upstream("503".to_string()));
    }
}
