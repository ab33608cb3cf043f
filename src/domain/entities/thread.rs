//! Curated project threads served by the upstream thread API.
//!
//! Upstream records are passed through untouched (unknown fields included)
//! and enriched with a display title, the GitHub repository name and a set
//! of project tags.

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::sync::LazyLock;

/// Longest title derived from thread content, in characters.
pub const MAX_TITLE_CHARS: usize = 80;

/// Title used when a thread has no content.
pub const FALLBACK_TITLE: &str = "Open Source Project";

static GITHUB_REPO_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"github\.com/([^/]+/[^/]+)").unwrap());

/// A single post as returned by the thread API.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Thread {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,

    #[serde(default, deserialize_with = "optional_string_or_number")]
    pub conversation_id: Option<String>,

    #[serde(default)]
    pub content: String,

    #[serde(default)]
    pub username: Option<String>,

    #[serde(default)]
    pub date: Option<String>,

    #[serde(default)]
    pub github_repo: Option<String>,

    #[serde(default)]
    pub github_card_image: Option<String>,

    /// Any other upstream fields, forwarded as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Thread {
    /// First content line, truncated to [`MAX_TITLE_CHARS`].
    pub fn title(&self) -> String {
        project_title(&self.content)
    }

    /// `owner/repo` extracted from [`Self::github_repo`].
    pub fn repo_name(&self) -> Option<String> {
        self.github_repo.as_deref().and_then(repo_name)
    }

    pub fn tags(&self) -> Vec<ProjectTag> {
        project_tags(self)
    }

    /// Publication date parsed as RFC 3339, if upstream sent one.
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        self.date
            .as_deref()
            .and_then(|d| DateTime::parse_from_rfc3339(d).ok())
            .map(|d| d.with_timezone(&Utc))
    }
}

/// Upstream pagination block.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: u32,
    #[serde(default)]
    pub has_previous: bool,
    #[serde(default)]
    pub has_next: bool,
}

/// One page of threads.
#[derive(Debug, Clone, Deserialize)]
pub struct ThreadPage {
    #[serde(default)]
    pub threads: Vec<Thread>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

/// Keyword-derived project category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProjectTag {
    GitHub,
    #[serde(rename = "API")]
    Api,
    #[serde(rename = "UI")]
    Ui,
    #[serde(rename = "CLI")]
    Cli,
    JavaScript,
}

/// Thread enriched for list views.
#[derive(Debug, Clone, Serialize)]
pub struct ThreadSummary {
    #[serde(flatten)]
    pub thread: Thread,
    pub title: String,
    pub repo_name: Option<String>,
    pub tags: Vec<ProjectTag>,
    pub published_at: Option<DateTime<Utc>>,
}

impl From<Thread> for ThreadSummary {
    fn from(thread: Thread) -> Self {
        Self {
            title: thread.title(),
            repo_name: thread.repo_name(),
            tags: thread.tags(),
            published_at: thread.published_at(),
            thread,
        }
    }
}

/// Post inside a conversation; the first one is the main post.
#[derive(Debug, Clone, Serialize)]
pub struct ConversationPost {
    #[serde(flatten)]
    pub thread: Thread,
    pub is_main: bool,
}

/// A full conversation (thread detail view).
#[derive(Debug, Clone, Serialize)]
pub struct Conversation {
    pub title: String,
    pub repo_name: Option<String>,
    pub participants: Vec<String>,
    pub posts: Vec<ConversationPost>,
}

impl Conversation {
    /// Builds a conversation from posts in upstream order.
    ///
    /// Title and repository come from the first post; participants are the
    /// unique usernames in order of first appearance.
    pub fn from_posts(posts: Vec<Thread>) -> Self {
        let title = posts
            .first()
            .map(Thread::title)
            .unwrap_or_else(|| FALLBACK_TITLE.to_string());

        let repo_name = posts.iter().find_map(Thread::repo_name);

        let mut participants: Vec<String> = Vec::new();
        for username in posts.iter().filter_map(|p| p.username.as_ref()) {
            if !participants.contains(username) {
                participants.push(username.clone());
            }
        }

        let posts = posts
            .into_iter()
            .enumerate()
            .map(|(index, thread)| ConversationPost {
                thread,
                is_main: index == 0,
            })
            .collect();

        Self {
            title,
            repo_name,
            participants,
            posts,
        }
    }
}

/// Derives a display title from post content.
pub fn project_title(content: &str) -> String {
    let first_line = content.split('\n').next().unwrap_or_default();

    if first_line.is_empty() {
        return FALLBACK_TITLE.to_string();
    }

    if first_line.chars().count() > MAX_TITLE_CHARS {
        let truncated: String = first_line.chars().take(MAX_TITLE_CHARS).collect();
        return format!("{}...", truncated);
    }

    first_line.to_string()
}

/// Extracts `owner/repo` from a GitHub URL.
pub fn repo_name(github_url: &str) -> Option<String> {
    GITHUB_REPO_REGEX
        .captures(github_url)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Classifies a thread by its repository link and content keywords.
///
/// Keyword matching is a case-insensitive substring test, so `"js"` also
/// matches words such as `"json"`.
pub fn project_tags(thread: &Thread) -> Vec<ProjectTag> {
    let mut tags = Vec::new();

    if thread.github_repo.as_deref().is_some_and(|r| !r.is_empty()) {
        tags.push(ProjectTag::GitHub);
    }

    let content = thread.content.to_lowercase();
    let mentions = |words: &[&str]| words.iter().any(|w| content.contains(w));

    if mentions(&["api", "swagger"]) {
        tags.push(ProjectTag::Api);
    }
    if mentions(&["ui", "interface"]) {
        tags.push(ProjectTag::Ui);
    }
    if mentions(&["terminal", "cli"]) {
        tags.push(ProjectTag::Cli);
    }
    if mentions(&["javascript", "js"]) {
        tags.push(ProjectTag::JavaScript);
    }

    tags
}

/// Accepts either a JSON string or number and yields a string.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number, got {}",
            other
        ))),
    }
}

fn optional_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected string or number, got {}",
            other
        ))),
    }
}
