#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use opensourceprojects::application::services::{
    PreviewService, RedirectResolver, SubscriptionService, ThreadService,
};
use opensourceprojects::domain::clients::{
    ContactListClient, ContactListError, FetchError, MetadataFetcher, ProbeError, ProbeResponse,
    RedirectProbe, ThreadSource, ThreadsError,
};
use opensourceprojects::domain::entities::{
    NewContact, PageMetadata, Pagination, ShortenerDomains, Thread, ThreadPage,
};
use opensourceprojects::state::AppState;
use serde_json::json;

/// Redirect table keyed by URL. Unknown URLs answer `200 OK`.
#[derive(Default)]
pub struct FakeProbe {
    redirects: HashMap<String, ProbeResponse>,
}

impl FakeProbe {
    pub fn with_redirect(mut self, from: &str, status: u16, to: &str) -> Self {
        self.redirects
            .insert(from.to_string(), ProbeResponse::redirect(status, to));
        self
    }
}

#[async_trait]
impl RedirectProbe for FakeProbe {
    async fn head(&self, url: &str) -> Result<ProbeResponse, ProbeError> {
        Ok(self
            .redirects
            .get(url)
            .cloned()
            .unwrap_or(ProbeResponse::status(200)))
    }
}

/// What [`FakeFetcher`] does for every URL.
#[derive(Clone)]
pub enum FetchBehavior {
    Page(PageMetadata),
    Forbidden,
    Fail(String),
    NotHtml,
    Hang,
}

/// Metadata fetcher that records requested URLs.
pub struct FakeFetcher {
    behavior: FetchBehavior,
    pub requested: Mutex<Vec<String>>,
}

impl FakeFetcher {
    pub fn new(behavior: FetchBehavior) -> Self {
        Self {
            behavior,
            requested: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl MetadataFetcher for FakeFetcher {
    async fn fetch(&self, url: &str) -> Result<PageMetadata, FetchError> {
        self.requested.lock().unwrap().push(url.to_string());

        match &self.behavior {
            FetchBehavior::Page(metadata) => Ok(metadata.clone()),
            FetchBehavior::Forbidden => Err(FetchError::CorsBlocked),
            FetchBehavior::Fail(details) => Err(FetchError::Upstream(details.clone())),
            FetchBehavior::NotHtml => Err(FetchError::Invalid("application/pdf".to_string())),
            FetchBehavior::Hang => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Err(FetchError::Timeout)
            }
        }
    }
}

/// Contact list that records contacts and answers with a fixed outcome.
pub struct FakeContactList {
    rejection: Option<(u16, Option<String>)>,
    pub contacts: Mutex<Vec<NewContact>>,
}

impl FakeContactList {
    pub fn accepting() -> Self {
        Self {
            rejection: None,
            contacts: Mutex::new(Vec::new()),
        }
    }

    pub fn rejecting(status: u16, message: Option<&str>) -> Self {
        Self {
            rejection: Some((status, message.map(str::to_string))),
            contacts: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ContactListClient for FakeContactList {
    async fn add_contact(&self, contact: NewContact) -> Result<(), ContactListError> {
        self.contacts.lock().unwrap().push(contact);

        match &self.rejection {
            None => Ok(()),
            Some((status, message)) => Err(ContactListError::Rejected {
                status: *status,
                message: message.clone(),
            }),
        }
    }
}

/// Thread API serving three pages of two threads and conversation `"100"`.
#[derive(Default)]
pub struct FakeThreadSource {
    pub down: bool,
}

#[async_trait]
impl ThreadSource for FakeThreadSource {
    async fn list(&self, page: u32) -> Result<ThreadPage, ThreadsError> {
        if self.down {
            return Err(ThreadsError::Upstream("connection refused".to_string()));
        }

        Ok(ThreadPage {
            threads: vec![
                thread(
                    &format!("{}1", page),
                    "awesome-cli: a CLI for your terminal",
                    "alice",
                    Some("https://github.com/alice/awesome-cli"),
                ),
                thread(&format!("{}2", page), "", "bob", None),
            ],
            pagination: Some(Pagination {
                current_page: page,
                total_pages: 3,
                has_previous: page > 1,
                has_next: page < 3,
            }),
        })
    }

    async fn conversation(&self, id: &str) -> Result<Vec<Thread>, ThreadsError> {
        if self.down {
            return Err(ThreadsError::Upstream("connection refused".to_string()));
        }

        match id {
            "100" => Ok(vec![
                thread(
                    "100",
                    "A React UI kit\nwith lots of components",
                    "alice",
                    Some("https://github.com/alice/ui-kit"),
                ),
                thread("101", "Looks great!", "bob", None),
                thread("102", "Thanks!", "alice", None),
            ]),
            "empty" => Ok(Vec::new()),
            other => Err(ThreadsError::NotFound(other.to_string())),
        }
    }
}

pub fn thread(id: &str, content: &str, username: &str, repo: Option<&str>) -> Thread {
    serde_json::from_value(json!({
        "id": id,
        "content": content,
        "username": username,
        "date": "2026-03-01T12:00:00Z",
        "github_repo": repo,
    }))
    .unwrap()
}

pub fn article() -> PageMetadata {
    PageMetadata {
        title: Some("  An Article  ".to_string()),
        description: Some("All about things".to_string()),
        image: Some("https://example.com/cover.png".to_string()),
    }
}

/// Builder for an [`AppState`] backed by fakes.
pub struct TestState {
    pub probe: FakeProbe,
    pub fetcher: Arc<FakeFetcher>,
    pub contacts: Option<Arc<FakeContactList>>,
    pub threads: FakeThreadSource,
    pub timeout: Duration,
}

impl Default for TestState {
    fn default() -> Self {
        Self {
            probe: FakeProbe::default(),
            fetcher: Arc::new(FakeFetcher::new(FetchBehavior::Page(article()))),
            contacts: Some(Arc::new(FakeContactList::accepting())),
            threads: FakeThreadSource::default(),
            timeout: Duration::from_secs(15),
        }
    }
}

impl TestState {
    pub fn build(self) -> AppState {
        let preview_service = PreviewService::new(
            ShortenerDomains::default(),
            RedirectResolver::new(Arc::new(self.probe), 5),
            self.fetcher,
            self.timeout,
        );

        let subscription_service = SubscriptionService::new(
            self.contacts
                .map(|c| c as Arc<dyn ContactListClient>),
            2,
        );

        let thread_service = ThreadService::new(Arc::new(self.threads));

        AppState::new(
            Arc::new(preview_service),
            Arc::new(subscription_service),
            Arc::new(thread_service),
        )
    }
}

pub fn create_test_state() -> AppState {
    TestState::default().build()
}
