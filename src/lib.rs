//! # Open Source Projects
//!
//! Backend for a showcase of curated open-source projects, built with Axum.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Entities and the client traits outbound I/O hides behind
//! - **Application Layer** ([`application`]) - Redirect resolution, previews, subscriptions, threads
//! - **Infrastructure Layer** ([`infrastructure`]) - `reqwest` implementations of the client traits
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Link previews that unwrap known URL shorteners by walking redirects
//! - Newsletter signup relayed to Brevo
//! - Paginated curated project feed with derived titles and tags
//! - Rate limiting and structured logging
//!
//! ## Quick Start
//!
//! ```bash
//! export BREVO_API_KEY="xkeysib-..."  # Optional
//!
//! cargo run
//! curl 'http://localhost:3000/api/preview?url=https://bit.ly/xyz'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        PreviewError, PreviewService, RedirectResolver, SubscribeError, SubscriptionService,
        ThreadService,
    };
    pub use crate::domain::entities::{LinkPreview, PageMetadata, ShortenerDomains, Thread};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
