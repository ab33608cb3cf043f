use std::sync::Arc;

use crate::application::services::{PreviewService, SubscriptionService, ThreadService};

/// Shared handler state. Cloning is cheap: every service sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub preview_service: Arc<PreviewService>,
    pub subscription_service: Arc<SubscriptionService>,
    pub thread_service: Arc<ThreadService>,
}

impl AppState {
    pub fn new(
        preview_service: Arc<PreviewService>,
        subscription_service: Arc<SubscriptionService>,
        thread_service: Arc<ThreadService>,
    ) -> Self {
        Self {
            preview_service,
            subscription_service,
            thread_service,
        }
    }
}
