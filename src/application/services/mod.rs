//! Services orchestrating domain clients.

pub mod preview_service;
pub mod redirect_resolver;
pub mod subscription_service;
pub mod thread_service;

pub use preview_service::{PreviewError, PreviewService};
pub use redirect_resolver::{RedirectHop, RedirectResolver, Resolution};
pub use subscription_service::{SubscribeError, SubscriptionService};
pub use thread_service::{ThreadListing, ThreadService};
