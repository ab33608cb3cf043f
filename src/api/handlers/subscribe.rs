//! Handler for the newsletter subscription endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use validator::Validate;

use crate::api::dto::subscribe::{SubscribeRequest, SubscribeResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Adds an email address to the mailing list.
///
/// # Endpoint
///
/// `POST /api/subscribe`
///
/// # Request Body
///
/// ```json
/// { "email": "reader@example.com" }
/// ```
///
/// # Response
///
/// ```json
/// { "message": "Subscription successful!" }
/// ```
///
/// # Errors
///
/// - **400**: malformed body or invalid email
/// - **500**: provider not configured, or provider unreachable
/// - any other status the provider answered with, with its message
pub async fn subscribe_handler(
    State(state): State<AppState>,
    payload: Result<Json<SubscribeRequest>, JsonRejection>,
) -> Result<Json<SubscribeResponse>, AppError> {
    let Json(mut payload) = payload?;
    payload.email = payload.email.map(|email| email.trim().to_string());
    payload.validate()?;

    let email = payload.email.unwrap_or_default();
    state.subscription_service.subscribe(&email).await?;

    Ok(Json(SubscribeResponse {
        message: "Subscription successful!".to_string(),
    }))
}
