//! Core domain entities.
//!
//! Plain data structures for the concepts the service deals with. None of
//! them outlive a single request.
//!
//! # Entity Types
//!
//! - [`ShortenerDomains`] - The fixed set of known URL shortener hosts
//! - [`PageMetadata`], [`LinkPreview`] - Scraped and normalized link previews
//! - [`Thread`], [`ThreadSummary`], [`Conversation`] - Curated project posts
//! - [`NewContact`] - A newsletter signup

pub mod contact;
pub mod preview;
pub mod shortener;
pub mod thread;

pub use contact::NewContact;
pub use preview::{LinkPreview, PageMetadata};
pub use shortener::{DEFAULT_SHORTENER_DOMAINS, ShortenerDomains};
pub use thread::{
    Conversation, ConversationPost, Pagination, ProjectTag, Thread, ThreadPage, ThreadSummary,
};
