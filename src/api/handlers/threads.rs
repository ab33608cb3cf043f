//! Handlers for the curated thread endpoints.

use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
};

use crate::api::dto::threads::ThreadsQuery;
use crate::api::middleware::tracing::record_target;
use crate::application::services::ThreadListing;
use crate::domain::entities::Conversation;
use crate::error::AppError;
use crate::state::AppState;

/// Lists one page of curated projects.
///
/// # Endpoint
///
/// `GET /api/threads?page=N`
///
/// # Query Parameters
///
/// - `page` (optional): 1-based page number (default: 1)
///
/// # Response
///
/// Threads enriched with `title`, `repo_name`, `tags` and `published_at`,
/// the upstream `pagination` block, and `pages`, the navigation controls.
///
/// # Errors
///
/// - **400**: page is 0 or not a number
/// - **502**: upstream API failed
pub async fn threads_handler(
    State(state): State<AppState>,
    query: Result<Query<ThreadsQuery>, QueryRejection>,
) -> Result<Json<ThreadListing>, AppError> {
    let Query(query) = query?;

    let page = query.page();
    record_target(format_args!("page {}", page));

    let listing = state.thread_service.list(page).await?;

    Ok(Json(listing))
}

/// Returns a full conversation.
///
/// # Endpoint
///
/// `GET /api/threads/{id}`
///
/// # Errors
///
/// - **404**: unknown thread or empty conversation
/// - **502**: upstream API failed
pub async fn thread_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Conversation>, AppError> {
    record_target(&id);

    let conversation = state.thread_service.conversation(&id).await?;

    Ok(Json(conversation))
}
