//! API route configuration.

use crate::api::handlers::{preview_handler, subscribe_handler, thread_handler, threads_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All public API routes.
///
/// # Endpoints
///
/// - `GET  /preview?url=`   - Link preview with shortener resolution
/// - `POST /subscribe`      - Newsletter signup
/// - `GET  /threads?page=`  - Curated project listing
/// - `GET  /threads/{id}`   - Full conversation for a project
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/preview", get(preview_handler))
        .route("/subscribe", post(subscribe_handler))
        .route("/threads", get(threads_handler))
        .route("/threads/{id}", get(thread_handler))
}
