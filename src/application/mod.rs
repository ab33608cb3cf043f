//! Application layer services implementing the service's use cases.
//!
//! Services coordinate calls through the client traits defined in
//! [`crate::domain::clients`] and expose a clean API to HTTP handlers and the
//! operator CLI.
//!
//! # Available Services
//!
//! - [`services::redirect_resolver::RedirectResolver`] - Walks shortener redirect chains
//! - [`services::preview_service::PreviewService`] - Builds link previews
//! - [`services::subscription_service::SubscriptionService`] - Newsletter signups
//! - [`services::thread_service::ThreadService`] - Curated thread feed

pub mod services;
