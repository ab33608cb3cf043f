//! Handler for the link preview endpoint.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use serde_json::json;

use crate::api::dto::preview::PreviewQuery;
use crate::api::middleware::tracing::record_target;
use crate::domain::entities::LinkPreview;
use crate::error::AppError;
use crate::state::AppState;

/// Builds a preview card for an arbitrary link.
///
/// # Endpoint
///
/// `GET /api/preview?url=<url>`
///
/// Links on a known shortener are unwrapped first, so the preview shows the
/// real destination.
///
/// # Response
///
/// ```json
/// {
///   "title": "Article",
///   "description": "About things",
///   "image": "https://example.com/cover.png",
///   "originalUrl": "https://bit.ly/xyz",
///   "finalUrl": "https://example.com/article",
///   "hostname": "example.com",
///   "wasRedirected": true
/// }
/// ```
///
/// # Errors
///
/// - **400**: `url` missing, not an HTTP(S) URL, or unusable after resolution
/// - **403**: target refused to serve the page
/// - **408**: resolution or fetch exceeded the preview timeout
/// - **500**: any other failure, with `details`
///
/// Every error except a missing `url` echoes `originalUrl`.
pub async fn preview_handler(
    State(state): State<AppState>,
    query: Result<Query<PreviewQuery>, QueryRejection>,
) -> Result<Json<LinkPreview>, AppError> {
    let Query(query) = query?;

    let url = query
        .url
        .filter(|u| !u.is_empty())
        .ok_or_else(|| AppError::bad_request("URL parameter is required", json!({})))?;

    record_target(&url);

    let preview = state.preview_service.preview(&url).await?;

    Ok(Json(preview))
}
