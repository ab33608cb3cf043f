//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod preview;
pub mod subscribe;
pub mod threads;

pub use health::health_handler;
pub use preview::preview_handler;
pub use subscribe::subscribe_handler;
pub use threads::{thread_handler, threads_handler};
